use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod input;
mod prompt;
mod ui;

use input::InputSection;
use prompt::PromptSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	prompt: PromptSection,
	input: InputSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.prompt.apply_cli_overrides(cli);
		self.input.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			page_size: detect_source(
				cli.page_size.is_some(),
				self.prompt.page_size.is_some(),
				"CHECKSIFT__PROMPT__PAGE_SIZE",
				"--page-size",
				"prompt.page_size",
			),
			minimum_choices: detect_source(
				cli.min.is_some(),
				self.prompt.minimum_choices.is_some(),
				"CHECKSIFT__PROMPT__MINIMUM_CHOICES",
				"--min",
				"prompt.minimum_choices",
			),
			maximum_choices: detect_source(
				cli.max.is_some(),
				self.prompt.maximum_choices.is_some(),
				"CHECKSIFT__PROMPT__MAXIMUM_CHOICES",
				"--max",
				"prompt.maximum_choices",
			),
		};

		let (prompt, require) = self.prompt.resolve();
		let input = self.input.resolve()?;
		let theme = self.ui.resolve()?;

		let config = ResolvedConfig {
			prompt,
			require,
			input,
			theme,
		};

		config.validate(&sources).map_err(|err| {
			tracing::debug!(key = err.key(), "configuration rejected");
			Error::new(err)
		})?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
