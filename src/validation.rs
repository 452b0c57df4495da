use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

/// Caller-supplied check run after the cardinality bounds pass.
pub type Validator = Arc<dyn Fn(&[Value]) -> Result<(), String> + Send + Sync>;

/// A selection-count limit with an optional custom failure message.
///
/// Deserializes from either `3` or `[3, "Pick at least three"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawBound")]
pub struct Bound {
	pub count: usize,
	pub message: Option<String>,
}

impl Bound {
	#[must_use]
	pub fn new(count: usize) -> Self {
		Self {
			count,
			message: None,
		}
	}

	#[must_use]
	pub fn with_message(count: usize, message: impl Into<String>) -> Self {
		Self {
			count,
			message: Some(message.into()),
		}
	}

	fn message_or(&self, direction: &str) -> String {
		self.message.clone().unwrap_or_else(|| {
			let noun = if self.count == 1 { "choice" } else { "choices" };
			format!("You have to check {direction} {} {noun}", self.count)
		})
	}
}

impl From<usize> for Bound {
	fn from(count: usize) -> Self {
		Self::new(count)
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBound {
	Count(usize),
	WithMessage(usize, String),
}

impl From<RawBound> for Bound {
	fn from(raw: RawBound) -> Self {
		match raw {
			RawBound::Count(count) => Self::new(count),
			RawBound::WithMessage(count, message) => Self::with_message(count, message),
		}
	}
}

/// Min/max cardinality checks wrapped around an optional custom validator.
#[derive(Clone, Default)]
pub struct ValidationGate {
	minimum: Option<Bound>,
	maximum: Option<Bound>,
	custom: Option<Validator>,
}

impl fmt::Debug for ValidationGate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ValidationGate")
			.field("minimum", &self.minimum)
			.field("maximum", &self.maximum)
			.field("custom", &self.custom.is_some())
			.finish()
	}
}

impl ValidationGate {
	#[must_use]
	pub fn new(minimum: Option<Bound>, maximum: Option<Bound>) -> Self {
		Self {
			minimum,
			maximum,
			custom: None,
		}
	}

	#[must_use]
	pub fn with_validator(mut self, validator: Validator) -> Self {
		self.custom = Some(validator);
		self
	}

	/// Check `values` against the minimum, then the maximum, then the custom validator.
	pub fn validate(&self, values: &[Value]) -> Result<(), String> {
		if let Some(minimum) = &self.minimum
			&& values.len() < minimum.count
		{
			return Err(minimum.message_or("at least"));
		}
		if let Some(maximum) = &self.maximum
			&& values.len() > maximum.count
		{
			return Err(maximum.message_or("at most"));
		}
		match &self.custom {
			Some(custom) => custom(values),
			None => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn requires_red() -> Validator {
		Arc::new(|values: &[Value]| {
			if values.contains(&json!("red")) {
				Ok(())
			} else {
				Err("red is mandatory".to_string())
			}
		})
	}

	fn colours(names: &[&str]) -> Vec<Value> {
		names.iter().map(|name| json!(name)).collect()
	}

	#[test]
	fn bounds_run_before_the_custom_validator() {
		let gate = ValidationGate::new(Some(Bound::new(1)), Some(Bound::new(4)))
			.with_validator(requires_red());

		assert_eq!(
			gate.validate(&[]),
			Err("You have to check at least 1 choice".to_string())
		);
		assert_eq!(
			gate.validate(&colours(&["a", "b", "c", "d", "e"])),
			Err("You have to check at most 4 choices".to_string())
		);
		assert_eq!(
			gate.validate(&colours(&["blue", "green"])),
			Err("red is mandatory".to_string())
		);
		assert_eq!(gate.validate(&colours(&["blue", "red"])), Ok(()));
		assert_eq!(gate.validate(&colours(&["red"])), Ok(()));
	}

	#[test]
	fn custom_messages_replace_the_defaults() {
		let gate = ValidationGate::new(
			Some(Bound::with_message(2, "pick a pair")),
			Some(Bound::with_message(2, "only a pair")),
		);
		assert_eq!(gate.validate(&colours(&["a"])), Err("pick a pair".into()));
		assert_eq!(gate.validate(&colours(&["a", "b", "c"])), Err("only a pair".into()));
		assert_eq!(gate.validate(&colours(&["a", "b"])), Ok(()));
	}

	#[test]
	fn unbounded_gate_accepts_anything() {
		let gate = ValidationGate::default();
		assert_eq!(gate.validate(&[]), Ok(()));
	}

	#[test]
	fn bounds_deserialize_from_count_or_pair() {
		let plain: Bound = serde_json::from_value(json!(3)).expect("count");
		assert_eq!(plain, Bound::new(3));
		let pair: Bound = serde_json::from_value(json!([2, "two please"])).expect("pair");
		assert_eq!(pair, Bound::with_message(2, "two please"));
	}
}
