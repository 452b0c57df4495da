//! The checked set, kept across re-fetches.
//!
//! Choice identity is value equality: a choice fetched again under a new query
//! is the same selection entry as long as its value compares equal, so
//! toggling it never leaves a stale duplicate behind.

use serde_json::Value;

use crate::choice::Choice;

/// Checked values and the choices they came from, in the order they were checked.
///
/// `values[i]` is always `checked[i].value`; [`Selection::toggle`] is the only
/// way to add or remove entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
	values: Vec<Value>,
	checked: Vec<Choice>,
}

impl Selection {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Set `choice` to `checked` (or flip it when `None`) and mirror the result here.
	pub fn toggle(&mut self, choice: &mut Choice, checked: Option<bool>) {
		let checked = checked.unwrap_or(!choice.checked);
		self.remove(&choice.value);
		choice.checked = checked;
		if checked {
			self.values.push(choice.value.clone());
			self.checked.push(choice.clone());
		}
	}

	/// Carry the checked state over to a re-fetched `choice`.
	///
	/// A value that is already selected keeps its place in the order; only its
	/// stored choice is replaced by the fresh one.
	pub fn restore(&mut self, choice: &mut Choice) {
		let position = self
			.checked
			.iter()
			.position(|existing| existing.value == choice.value);
		choice.checked = position.is_some();
		if let Some(position) = position {
			self.checked[position] = choice.clone();
		}
	}

	fn remove(&mut self, value: &Value) {
		self.values.retain(|existing| existing != value);
		self.checked.retain(|existing| existing.value != *value);
	}

	#[must_use]
	pub fn contains(&self, value: &Value) -> bool {
		self.values.iter().any(|existing| existing == value)
	}

	#[must_use]
	pub fn values(&self) -> &[Value] {
		&self.values
	}

	#[must_use]
	pub fn checked_choices(&self) -> &[Choice] {
		&self.checked
	}

	/// Compact display forms of the checked choices.
	#[must_use]
	pub fn shorts(&self) -> Vec<String> {
		self.checked.iter().map(|choice| choice.short.clone()).collect()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.values.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}
