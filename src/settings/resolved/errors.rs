use thiserror::Error;

use super::SettingSource;

/// A resolved setting that cannot drive a prompt.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("prompt.page_size from {origin} must show at least one row (value: 0)")]
	EmptyPage { origin: SettingSource },
	#[error(
		"prompt.minimum_choices from {origin} asks for {minimum} checked choices but at most {maximum} are allowed"
	)]
	InvertedBounds {
		origin: SettingSource,
		minimum: usize,
		maximum: usize,
	},
}

impl ConfigError {
	/// Configuration key the error refers to.
	pub(crate) fn key(&self) -> &'static str {
		match self {
			Self::EmptyPage { .. } => "prompt.page_size",
			Self::InvertedBounds { .. } => "prompt.minimum_choices",
		}
	}
}
