use std::sync::Arc;

use anyhow::{Context, Result};
use checksift::fuzzy;
use checksift::{Answer, Answers, ChoiceItem, CheckboxUi};
use serde_json::Value;
use tracing::info;

use crate::settings::ResolvedConfig;

mod input;

pub(crate) use input::{ChoiceInput, InputFormat, WalkOptions, load_choices};

/// Loads the configured choices and drives one checkbox prompt over them.
pub(crate) struct CheckboxWorkflow {
	config: ResolvedConfig,
	choices: Vec<ChoiceItem>,
}

impl CheckboxWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let choices = load_choices(&config.input).context("failed to load choices")?;
		info!(count = choices.len(), input = ?config.input, "loaded choices");
		Ok(Self { config, choices })
	}

	/// `Ok(None)` means the prompt was cancelled.
	pub(crate) fn run(self) -> Result<Option<Answer>> {
		let Self { config, choices } = self;
		let searchable = config.prompt.searchable;

		let mut ui = CheckboxUi::from_options(config.prompt).with_theme_name(&config.theme);
		if let Some(validator) = require_validator(config.require) {
			ui = ui.with_validator(validator);
		}

		ui = if searchable {
			let items = Arc::new(choices);
			ui.with_source_fn(
				move |_answers: &Answers, query: Option<&str>| -> anyhow::Result<Vec<ChoiceItem>> {
					Ok(fuzzy::filter(&items, query))
				},
			)
		} else {
			ui.with_choices(choices)
		};

		ui.run().context("checkbox prompt failed")
	}
}

fn require_validator(
	required: Vec<String>,
) -> Option<impl Fn(&[Value]) -> Result<(), String> + Send + Sync + 'static> {
	if required.is_empty() {
		return None;
	}
	Some(move |values: &[Value]| check_required(&required, values))
}

fn check_required(required: &[String], values: &[Value]) -> Result<(), String> {
	let missing = required.iter().find(|wanted| {
		!values
			.iter()
			.any(|value| value.as_str() == Some(wanted.as_str()))
	});
	match missing {
		Some(value) => Err(format!("`{value}` must be selected")),
		None => Ok(()),
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn required_values_must_all_be_checked() {
		let required = vec!["red".to_string(), "blue".to_string()];
		assert_eq!(
			check_required(&required, &[json!("red")]),
			Err("`blue` must be selected".to_string())
		);
		assert!(check_required(&required, &[json!("blue"), json!("red")]).is_ok());
	}

	#[test]
	fn no_requirements_means_no_validator() {
		assert!(require_validator(Vec::new()).is_none());
		let validator = require_validator(vec!["red".into()]).expect("validator");
		assert!(validator(&[json!("green")]).is_err());
	}

	#[test]
	fn workflow_loads_file_choices() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("colours.txt");
		std::fs::write(&path, "red\n---\nblue\n").expect("write");

		let workflow = CheckboxWorkflow::from_config(ResolvedConfig {
			prompt: checksift::PromptOptions::default(),
			require: Vec::new(),
			input: ChoiceInput::File {
				path,
				format: InputFormat::Lines,
			},
			theme: "dark".into(),
		})
		.expect("workflow");
		assert_eq!(workflow.choices.len(), 3);
		assert_eq!(workflow.choices[1], ChoiceItem::separator());
	}
}
