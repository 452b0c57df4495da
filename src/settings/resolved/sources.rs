use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) page_size: Option<SettingSource>,
	pub(crate) minimum_choices: Option<SettingSource>,
	pub(crate) maximum_choices: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_page_size(&self) -> SettingSource {
		self.page_size
			.clone()
			.unwrap_or(SettingSource::ConfigKey("prompt.page_size"))
	}

	pub(crate) fn source_for_minimum(&self) -> SettingSource {
		self.minimum_choices
			.clone()
			.unwrap_or(SettingSource::ConfigKey("prompt.minimum_choices"))
	}
}
