use std::sync::Arc;

use serde_json::Value;

use super::{Answer, CheckboxPrompt, DefaultEntry, PromptOptions};
use crate::choice::ChoiceItem;
use crate::error::PromptError;
use crate::source::{Answers, ChoiceSource, Source};
use crate::tui::{self, Theme};
use crate::validation::{Bound, ValidationGate, Validator};

/// A small builder for configuring a checkbox prompt before running it.
pub struct CheckboxUi {
	options: PromptOptions,
	source: Option<Source>,
	answers: Answers,
	validator: Option<Validator>,
	theme: Option<Theme>,
}

impl CheckboxUi {
	pub fn new(message: impl Into<String>) -> Self {
		Self::from_options(PromptOptions {
			message: message.into(),
			..PromptOptions::default()
		})
	}

	pub fn from_options(options: PromptOptions) -> Self {
		Self {
			options,
			source: None,
			answers: Answers::new(),
			validator: None,
			theme: None,
		}
	}

	pub fn with_source(mut self, source: Source) -> Self {
		self.source = Some(source);
		self
	}

	/// Use a fixed list of choices.
	pub fn with_choices<I, T>(self, items: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<ChoiceItem>,
	{
		self.with_source(Source::fixed(items))
	}

	/// Use a callable re-run for every distinct query.
	pub fn with_source_fn<S>(self, source: S) -> Self
	where
		S: ChoiceSource + 'static,
	{
		self.with_source(Source::callable(source))
	}

	/// Answers to earlier questions, forwarded to callable sources.
	pub fn with_answers(mut self, answers: Answers) -> Self {
		self.answers = answers;
		self
	}

	pub fn searchable(mut self, searchable: bool) -> Self {
		self.options.searchable = searchable;
		self
	}

	pub fn highlight(mut self, highlight: bool) -> Self {
		self.options.highlight = highlight;
		self
	}

	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.options.page_size = page_size;
		self
	}

	pub fn with_default<I, T>(mut self, entries: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<DefaultEntry>,
	{
		self.options.default = Some(entries.into_iter().map(Into::into).collect());
		self
	}

	pub fn with_minimum(mut self, bound: impl Into<Bound>) -> Self {
		self.options.minimum_choices = Some(bound.into());
		self
	}

	pub fn with_maximum(mut self, bound: impl Into<Bound>) -> Self {
		self.options.maximum_choices = Some(bound.into());
		self
	}

	/// Extra check run after the count bounds pass.
	pub fn with_validator<F>(mut self, validator: F) -> Self
	where
		F: Fn(&[Value]) -> Result<(), String> + Send + Sync + 'static,
	{
		self.validator = Some(Arc::new(validator));
		self
	}

	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = Theme::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn build(self) -> Result<CheckboxPrompt, PromptError> {
		let source = self.source.ok_or(PromptError::MissingSource)?;
		let mut gate = ValidationGate::new(
			self.options.minimum_choices.clone(),
			self.options.maximum_choices.clone(),
		);
		if let Some(validator) = self.validator {
			gate = gate.with_validator(validator);
		}
		CheckboxPrompt::new(self.options, source, self.answers, gate)
	}

	/// Run the prompt in the terminal. `Ok(None)` means the user cancelled.
	pub fn run(mut self) -> Result<Option<Answer>, PromptError> {
		let theme = self.theme.take().unwrap_or_default();
		let prompt = self.build()?;
		tui::run_with_theme(prompt, &theme)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn building_without_a_source_fails() {
		let err = CheckboxUi::new("Pick").build().err().expect("missing source");
		assert!(matches!(err, PromptError::MissingSource));
	}

	#[test]
	fn search_mode_rejects_static_sources() {
		let err = CheckboxUi::new("Pick")
			.with_choices(["a", "b"])
			.searchable(true)
			.build()
			.err()
			.expect("static search");
		assert!(matches!(err, PromptError::SearchRequiresCallable));
		assert!(err.is_configuration());
	}

	#[test]
	fn builder_options_reach_the_prompt() {
		let prompt = CheckboxUi::new("Pick")
			.with_choices(["a", "b"])
			.with_page_size(3)
			.highlight(true)
			.with_minimum(1_usize)
			.build()
			.expect("prompt");
		assert_eq!(prompt.options().page_size, 3);
		assert!(prompt.options().highlight);
		assert_eq!(prompt.options().minimum_choices, Some(Bound::new(1)));
	}
}
