use anyhow::{Result, anyhow};
use checksift::Theme;
use serde::Deserialize;

use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "dark";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	/// Validated theme name.
	pub(super) fn resolve(self) -> Result<String> {
		let name = self.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
		Theme::by_name(&name).ok_or_else(|| {
			anyhow!(
				"unknown theme `{name}` (available: {})",
				Theme::names().join(", ")
			)
		})?;
		Ok(name.trim().to_ascii_lowercase())
	}
}
