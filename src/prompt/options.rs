use serde::Deserialize;
use serde_json::Value;

use crate::choice::Choice;
use crate::validation::Bound;

pub(crate) const DEFAULT_PAGE_SIZE: usize = 7;

/// Static prompt configuration, deserializable from a config file section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PromptOptions {
	pub message: String,
	pub searchable: bool,
	/// Emphasise the pointed row. Display only.
	pub highlight: bool,
	pub page_size: usize,
	pub default: Option<Vec<DefaultEntry>>,
	pub minimum_choices: Option<Bound>,
	pub maximum_choices: Option<Bound>,
}

impl Default for PromptOptions {
	fn default() -> Self {
		Self {
			message: "Select choices".to_string(),
			searchable: false,
			highlight: false,
			page_size: DEFAULT_PAGE_SIZE,
			default: None,
			minimum_choices: None,
			maximum_choices: None,
		}
	}
}

/// `{ name = "..." }` entry of a default list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameMatcher {
	pub name: String,
}

/// An initially checked choice, matched by value or by display name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultEntry {
	Name(NameMatcher),
	Value(Value),
}

impl DefaultEntry {
	pub fn name(name: impl Into<String>) -> Self {
		Self::Name(NameMatcher { name: name.into() })
	}

	pub fn value(value: impl Into<Value>) -> Self {
		Self::Value(value.into())
	}

	#[must_use]
	pub fn matches(&self, choice: &Choice) -> bool {
		match self {
			Self::Name(matcher) => matcher.name == choice.name,
			Self::Value(value) => *value == choice.value,
		}
	}
}

impl From<&str> for DefaultEntry {
	fn from(value: &str) -> Self {
		Self::value(value)
	}
}
