use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.prompt.page_size == 0 {
		return Err(ConfigError::EmptyPage {
			origin: sources.source_for_page_size(),
		});
	}

	if let (Some(minimum), Some(maximum)) = (
		&config.prompt.minimum_choices,
		&config.prompt.maximum_choices,
	) && minimum.count > maximum.count
	{
		return Err(ConfigError::InvertedBounds {
			origin: sources.source_for_minimum(),
			minimum: minimum.count,
			maximum: maximum.count,
		});
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use checksift::{Bound, PromptOptions};

	use super::super::SettingSource;
	use super::*;
	use crate::workflow::{ChoiceInput, InputFormat};

	fn config(prompt: PromptOptions) -> ResolvedConfig {
		ResolvedConfig {
			prompt,
			require: Vec::new(),
			input: ChoiceInput::Stdin(InputFormat::Lines),
			theme: "dark".into(),
		}
	}

	#[test]
	fn validation_rejects_zero_page_size() {
		let config = config(PromptOptions {
			page_size: 0,
			..PromptOptions::default()
		});
		let sources = ConfigSources {
			page_size: Some(SettingSource::Environment("CHECKSIFT__PROMPT__PAGE_SIZE")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key(), "prompt.page_size");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn inverted_bounds_report_both_counts() {
		let config = config(PromptOptions {
			minimum_choices: Some(Bound::new(3)),
			maximum_choices: Some(Bound::new(2)),
			..PromptOptions::default()
		});

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key(), "prompt.minimum_choices");
		let message = err.to_string();
		assert!(message.contains("configuration key `prompt.minimum_choices`"));
		assert!(message.contains("asks for 3"));
		assert!(message.contains("at most 2"));
	}

	#[test]
	fn equal_bounds_are_accepted() {
		let config = config(PromptOptions {
			minimum_choices: Some(Bound::new(2)),
			maximum_choices: Some(Bound::new(2)),
			..PromptOptions::default()
		});
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}
}
