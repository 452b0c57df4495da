use std::path::{Path, PathBuf};

use anyhow::{Result, bail, ensure};
use serde::Deserialize;

use crate::cli::CliArgs;
use crate::workflow::{ChoiceInput, InputFormat, WalkOptions};

/// Where choices come from, as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct InputSection {
	pub(super) path: Option<PathBuf>,
	pub(super) format: Option<String>,
	pub(super) walk: Option<PathBuf>,
	pub(super) include_hidden: Option<bool>,
	pub(super) max_depth: Option<usize>,
}

impl InputSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.input.clone() {
			self.path = Some(path);
			self.walk = None;
		}
		if let Some(root) = cli.walk.clone() {
			self.walk = Some(root);
			self.path = None;
		}
		if let Some(format) = cli.format {
			self.format = Some(format.as_str().to_string());
		}
		if cli.hidden {
			self.include_hidden = Some(true);
		}
		if let Some(depth) = cli.max_depth {
			self.max_depth = Some(depth);
		}
	}

	pub(super) fn resolve(self) -> Result<ChoiceInput> {
		if let Some(root) = self.walk {
			ensure!(
				root.is_dir(),
				"walk root `{}` is not a directory",
				root.display()
			);
			return Ok(ChoiceInput::Walk(WalkOptions {
				root,
				include_hidden: self.include_hidden.unwrap_or(false),
				max_depth: self.max_depth,
			}));
		}

		let format = parse_format(self.format.as_deref())?;
		Ok(match self.path {
			Some(path) if path != Path::new("-") => ChoiceInput::File { path, format },
			_ => ChoiceInput::Stdin(format),
		})
	}
}

fn parse_format(value: Option<&str>) -> Result<InputFormat> {
	match value.map(str::trim) {
		None | Some("lines") => Ok(InputFormat::Lines),
		Some("json") => Ok(InputFormat::Json),
		Some(other) => bail!("unknown input format `{other}` (expected `lines` or `json`)"),
	}
}
