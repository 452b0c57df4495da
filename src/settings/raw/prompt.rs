use checksift::{Bound, DefaultEntry, PromptOptions};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Prompt behaviour as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PromptSection {
	pub(super) message: Option<String>,
	pub(super) searchable: Option<bool>,
	pub(super) highlight: Option<bool>,
	pub(super) page_size: Option<usize>,
	pub(super) default: Option<Vec<DefaultEntry>>,
	pub(super) minimum_choices: Option<Bound>,
	pub(super) maximum_choices: Option<Bound>,
	pub(super) require: Option<Vec<String>>,
}

impl PromptSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(message) = cli.message.clone() {
			self.message = Some(message);
		}
		if cli.search {
			self.searchable = Some(true);
		}
		if cli.highlight {
			self.highlight = Some(true);
		}
		if let Some(value) = cli.page_size {
			self.page_size = Some(value);
		}
		if let Some(values) = &cli.default {
			self.default = Some(values.iter().map(|value| DefaultEntry::value(value.as_str())).collect());
		}
		if let Some(values) = &cli.require {
			self.require = Some(values.clone());
		}
		self.minimum_choices =
			override_bound(self.minimum_choices.take(), cli.min, cli.min_message.clone());
		self.maximum_choices =
			override_bound(self.maximum_choices.take(), cli.max, cli.max_message.clone());
	}

	/// Fill defaults; the second element lists values the answer must contain.
	pub(super) fn resolve(self) -> (PromptOptions, Vec<String>) {
		let defaults = PromptOptions::default();
		let options = PromptOptions {
			message: self.message.unwrap_or(defaults.message),
			searchable: self.searchable.unwrap_or(defaults.searchable),
			highlight: self.highlight.unwrap_or(defaults.highlight),
			page_size: self.page_size.unwrap_or(defaults.page_size),
			default: self.default,
			minimum_choices: self.minimum_choices,
			maximum_choices: self.maximum_choices,
		};
		(options, self.require.unwrap_or_default())
	}
}

/// A CLI count replaces the configured one but keeps its message unless a
/// new message is given too.
fn override_bound(
	current: Option<Bound>,
	count: Option<usize>,
	message: Option<String>,
) -> Option<Bound> {
	let mut bound = match (current, count) {
		(Some(mut bound), Some(count)) => {
			bound.count = count;
			bound
		}
		(None, Some(count)) => Bound::new(count),
		(current, None) => current?,
	};
	if message.is_some() {
		bound.message = message;
	}
	Some(bound)
}
