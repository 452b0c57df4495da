//! Choice registry: the items a source produces and the list the prompt walks.
//!
//! A [`ChoiceSet`] is rebuilt wholesale from every source result. Separators
//! and disabled choices stay in the list for display but are invisible to the
//! pointer: every index the navigation code handles is a *selectable* index,
//! and [`ChoiceSet::real_len`] counts only those.

use serde::Deserialize;
use serde_json::Value;

const SEPARATOR_WIDTH: usize = 14;

/// Whether a choice can be selected, and why not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawDisabled")]
pub enum Disabled {
	#[default]
	No,
	Yes,
	Because(String),
}

impl Disabled {
	#[must_use]
	pub fn is_disabled(&self) -> bool {
		!matches!(self, Self::No)
	}

	/// Text shown next to a disabled choice.
	#[must_use]
	pub fn reason(&self) -> Option<&str> {
		match self {
			Self::No => None,
			Self::Yes => Some("Disabled"),
			Self::Because(reason) => Some(reason),
		}
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDisabled {
	Flag(bool),
	Reason(String),
}

impl From<RawDisabled> for Disabled {
	fn from(raw: RawDisabled) -> Self {
		match raw {
			RawDisabled::Flag(false) => Self::No,
			RawDisabled::Flag(true) => Self::Yes,
			RawDisabled::Reason(reason) => Self::Because(reason),
		}
	}
}

/// One selectable row.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
	pub name: String,
	pub value: Value,
	pub short: String,
	pub disabled: Disabled,
	pub checked: bool,
}

impl Choice {
	/// A choice whose value is its label.
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		Self::with_value(name.clone(), Value::String(name))
	}

	pub fn with_value(name: impl Into<String>, value: Value) -> Self {
		let name = name.into();
		Self {
			short: name.clone(),
			name,
			value,
			disabled: Disabled::No,
			checked: false,
		}
	}

	/// A choice labelled by its value's display text.
	pub fn from_value(value: Value) -> Self {
		Self::with_value(label_for(&value), value)
	}

	#[must_use]
	pub fn short(mut self, short: impl Into<String>) -> Self {
		self.short = short.into();
		self
	}

	#[must_use]
	pub fn disabled(mut self, disabled: Disabled) -> Self {
		self.disabled = disabled;
		self
	}

	#[must_use]
	pub fn is_selectable(&self) -> bool {
		!self.disabled.is_disabled()
	}
}

fn label_for(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

/// An entry in a [`ChoiceSet`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawChoice")]
pub enum ChoiceItem {
	Choice(Choice),
	Separator(Option<String>),
}

impl ChoiceItem {
	pub fn separator() -> Self {
		Self::Separator(None)
	}

	pub fn separator_with(line: impl Into<String>) -> Self {
		Self::Separator(Some(line.into()))
	}

	#[must_use]
	pub fn as_choice(&self) -> Option<&Choice> {
		match self {
			Self::Choice(choice) => Some(choice),
			Self::Separator(_) => None,
		}
	}

	#[must_use]
	pub fn is_selectable(&self) -> bool {
		self.as_choice().is_some_and(Choice::is_selectable)
	}

	/// Line drawn for a separator entry.
	#[must_use]
	pub fn separator_line(line: Option<&str>) -> String {
		match line {
			Some(line) => line.to_string(),
			None => "─".repeat(SEPARATOR_WIDTH),
		}
	}
}

impl From<Choice> for ChoiceItem {
	fn from(choice: Choice) -> Self {
		Self::Choice(choice)
	}
}

impl From<&str> for ChoiceItem {
	fn from(name: &str) -> Self {
		Self::Choice(Choice::new(name))
	}
}

impl From<String> for ChoiceItem {
	fn from(name: String) -> Self {
		Self::Choice(Choice::new(name))
	}
}

/// Accepted shapes when choices are read from JSON or TOML: a bare label, a
/// `{ separator = "..." }` table, or a full choice table.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawChoice {
	Label(String),
	Separator(RawSeparator),
	Full(RawFullChoice),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSeparator {
	separator: Option<String>,
}

#[derive(Deserialize)]
struct RawFullChoice {
	name: Option<String>,
	value: Option<Value>,
	short: Option<String>,
	#[serde(default)]
	disabled: Disabled,
}

impl From<RawChoice> for ChoiceItem {
	fn from(raw: RawChoice) -> Self {
		match raw {
			RawChoice::Label(name) => Self::from(name),
			RawChoice::Separator(RawSeparator { separator }) => {
				Self::Separator(separator.filter(|line| !line.is_empty()))
			}
			RawChoice::Full(full) => {
				let mut choice = match (full.name, full.value) {
					(Some(name), Some(value)) => Choice::with_value(name, value),
					(Some(name), None) => Choice::new(name),
					(None, Some(value)) => Choice::from_value(value),
					(None, None) => Choice::from_value(Value::Null),
				};
				if let Some(short) = full.short {
					choice.short = short;
				}
				choice.disabled = full.disabled;
				Self::Choice(choice)
			}
		}
	}
}

/// Ordered list of choices, separators included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceSet {
	items: Vec<ChoiceItem>,
	selectable: Vec<usize>,
}

impl ChoiceSet {
	pub fn new(items: Vec<ChoiceItem>) -> Self {
		let selectable = items
			.iter()
			.enumerate()
			.filter(|(_, item)| item.is_selectable())
			.map(|(index, _)| index)
			.collect();
		Self { items, selectable }
	}

	/// Every entry, in display order.
	#[must_use]
	pub fn items(&self) -> &[ChoiceItem] {
		&self.items
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Number of entries the pointer can land on.
	#[must_use]
	pub fn real_len(&self) -> usize {
		self.selectable.len()
	}

	/// Selectable choice at `pointer`.
	#[must_use]
	pub fn get(&self, pointer: usize) -> Option<&Choice> {
		let index = *self.selectable.get(pointer)?;
		self.items[index].as_choice()
	}

	pub fn get_mut(&mut self, pointer: usize) -> Option<&mut Choice> {
		let index = *self.selectable.get(pointer)?;
		match &mut self.items[index] {
			ChoiceItem::Choice(choice) => Some(choice),
			ChoiceItem::Separator(_) => None,
		}
	}

	/// Position in [`items`](Self::items) of the selectable choice at `pointer`.
	#[must_use]
	pub fn display_index(&self, pointer: usize) -> Option<usize> {
		self.selectable.get(pointer).copied()
	}

	/// Every non-separator choice, disabled ones included.
	pub fn choices_mut(&mut self) -> impl Iterator<Item = &mut Choice> {
		self.items.iter_mut().filter_map(|item| match item {
			ChoiceItem::Choice(choice) => Some(choice),
			ChoiceItem::Separator(_) => None,
		})
	}

	/// Selectable choices only.
	pub fn selectable(&self) -> impl Iterator<Item = &Choice> {
		self.selectable
			.iter()
			.filter_map(|&index| self.items[index].as_choice())
	}

	/// Mark every choice carrying `value` as `checked`.
	pub fn set_checked_by_value(&mut self, value: &Value, checked: bool) {
		for choice in self.choices_mut().filter(|choice| choice.value == *value) {
			choice.checked = checked;
		}
	}
}

impl From<Vec<ChoiceItem>> for ChoiceSet {
	fn from(items: Vec<ChoiceItem>) -> Self {
		Self::new(items)
	}
}

impl FromIterator<ChoiceItem> for ChoiceSet {
	fn from_iter<I: IntoIterator<Item = ChoiceItem>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn mixed() -> ChoiceSet {
		ChoiceSet::new(vec![
			"red".into(),
			ChoiceItem::separator(),
			"green".into(),
			ChoiceItem::separator_with("-- warm --"),
			"blue".into(),
		])
	}

	#[test]
	fn checking_by_value_reaches_every_sharing_choice() {
		let mut set = ChoiceSet::new(vec![
			Choice::with_value("first", json!(1)).into(),
			ChoiceItem::separator(),
			Choice::with_value("second", json!(1)).into(),
			Choice::with_value("other", json!(2)).into(),
		]);
		set.set_checked_by_value(&json!(1), true);

		let checked: Vec<_> = set
			.selectable()
			.filter(|choice| choice.checked)
			.map(|choice| choice.name.as_str())
			.collect();
		assert_eq!(checked, ["first", "second"]);
	}

	#[test]
	fn separators_do_not_count_towards_real_length() {
		let set = mixed();
		assert_eq!(set.len(), 5);
		assert_eq!(set.real_len(), 3);
		let names: Vec<_> = set.selectable().map(|c| c.name.as_str()).collect();
		assert_eq!(names, ["red", "green", "blue"]);
	}

	#[test]
	fn pointer_indexes_skip_separators() {
		let set = mixed();
		assert_eq!(set.get(1).map(|c| c.name.as_str()), Some("green"));
		assert_eq!(set.display_index(1), Some(2));
		assert_eq!(set.display_index(2), Some(4));
		assert!(set.get(3).is_none());
	}

	#[test]
	fn disabled_choices_are_not_selectable() {
		let set = ChoiceSet::new(vec![
			"a".into(),
			Choice::new("b").disabled(Disabled::Because("sold out".into())).into(),
			"c".into(),
		]);
		assert_eq!(set.real_len(), 2);
		assert_eq!(set.get(1).map(|c| c.name.as_str()), Some("c"));
	}

	#[test]
	fn choice_defaults_fill_short_and_value() {
		let choice = Choice::new("Apple");
		assert_eq!(choice.value, json!("Apple"));
		assert_eq!(choice.short, "Apple");

		let numeric = Choice::from_value(json!(42));
		assert_eq!(numeric.name, "42");
	}

	#[test]
	fn deserializes_every_accepted_shape() {
		let items: Vec<ChoiceItem> = serde_json::from_value(json!([
			"plain",
			{ "separator": null },
			{ "separator": "== more ==" },
			{ "name": "Label", "value": { "id": 7 }, "short": "L" },
			{ "value": 3, "disabled": "not today" },
			{ "name": "off", "disabled": true },
		]))
		.expect("choices");

		assert_eq!(items[0], ChoiceItem::from("plain"));
		assert_eq!(items[1], ChoiceItem::Separator(None));
		assert_eq!(items[2], ChoiceItem::separator_with("== more =="));

		let labelled = items[3].as_choice().expect("choice");
		assert_eq!(labelled.value, json!({ "id": 7 }));
		assert_eq!(labelled.short, "L");

		let numeric = items[4].as_choice().expect("choice");
		assert_eq!(numeric.name, "3");
		assert_eq!(numeric.disabled.reason(), Some("not today"));

		assert_eq!(items[5].as_choice().and_then(|c| c.disabled.reason()), Some("Disabled"));
	}

	#[test]
	fn default_separator_line_is_fixed_width() {
		assert_eq!(ChoiceItem::separator_line(None).chars().count(), SEPARATOR_WIDTH);
		assert_eq!(ChoiceItem::separator_line(Some("~~")), "~~");
	}
}
