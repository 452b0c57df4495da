use checksift::PromptOptions;

use crate::workflow::ChoiceInput;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) prompt: PromptOptions,
	/// Values the answer must contain.
	pub(crate) require: Vec<String>,
	pub(crate) input: ChoiceInput,
	pub(crate) theme: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}
