use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use checksift::ChoiceItem;
use ignore::WalkBuilder;
use tracing::{debug, warn};

/// Marks a separator when choices are read one per line.
const SEPARATOR_LINE: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputFormat {
	/// One choice per line.
	Lines,
	/// A JSON array of labels, separators or choice objects.
	Json,
}

impl fmt::Display for InputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Lines => "lines",
			Self::Json => "json",
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WalkOptions {
	pub(crate) root: PathBuf,
	pub(crate) include_hidden: bool,
	pub(crate) max_depth: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ChoiceInput {
	Stdin(InputFormat),
	File { path: PathBuf, format: InputFormat },
	Walk(WalkOptions),
}

/// Read the full choice list described by `input`.
pub(crate) fn load_choices(input: &ChoiceInput) -> Result<Vec<ChoiceItem>> {
	match input {
		ChoiceInput::Stdin(format) => {
			let mut text = String::new();
			io::stdin()
				.read_to_string(&mut text)
				.context("failed to read choices from stdin")?;
			parse_choices(&text, *format)
		}
		ChoiceInput::File { path, format } => {
			let text = fs::read_to_string(path)
				.with_context(|| format!("failed to read choices from {}", path.display()))?;
			parse_choices(&text, *format)
				.with_context(|| format!("invalid choices in {}", path.display()))
		}
		ChoiceInput::Walk(options) => Ok(walk_choices(options)),
	}
}

pub(crate) fn parse_choices(text: &str, format: InputFormat) -> Result<Vec<ChoiceItem>> {
	match format {
		InputFormat::Lines => Ok(text
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.map(|line| {
				if line == SEPARATOR_LINE {
					ChoiceItem::separator()
				} else {
					ChoiceItem::from(line)
				}
			})
			.collect()),
		InputFormat::Json => {
			serde_json::from_str(text).context("expected a JSON array of choices")
		}
	}
}

fn walk_choices(options: &WalkOptions) -> Vec<ChoiceItem> {
	let mut paths: Vec<String> = WalkBuilder::new(&options.root)
		.hidden(!options.include_hidden)
		.max_depth(options.max_depth)
		.build()
		.filter_map(|entry| match entry {
			Ok(entry) => Some(entry),
			Err(err) => {
				warn!(error = %err, "skipping unreadable entry");
				None
			}
		})
		.filter(|entry| entry.file_type().is_some_and(|kind| kind.is_file()))
		.filter_map(|entry| relative_label(&options.root, entry.path()))
		.collect();
	paths.sort();
	debug!(root = %options.root.display(), files = paths.len(), "walked choice root");

	paths.into_iter().map(ChoiceItem::from).collect()
}

fn relative_label(root: &Path, path: &Path) -> Option<String> {
	let relative = path.strip_prefix(root).ok()?;
	Some(relative.to_string_lossy().replace('\\', "/"))
}

#[cfg(test)]
mod tests {
	use checksift::Choice;
	use serde_json::json;

	use super::*;

	#[test]
	fn lines_skip_blanks_and_mark_separators() {
		let items = parse_choices("red\n\n  green \n---\nblue\n", InputFormat::Lines)
			.expect("lines");
		assert_eq!(
			items,
			vec![
				ChoiceItem::from("red"),
				ChoiceItem::from("green"),
				ChoiceItem::separator(),
				ChoiceItem::from("blue"),
			]
		);
	}

	#[test]
	fn json_accepts_labels_separators_and_objects() {
		let text = r#"["red", {"separator": "warm"}, {"name": "Blue", "value": 3, "short": "B"}]"#;
		let items = parse_choices(text, InputFormat::Json).expect("json");
		assert_eq!(items.len(), 3);
		assert_eq!(items[0], ChoiceItem::from("red"));
		assert_eq!(items[1], ChoiceItem::separator_with("warm"));
		let blue = items[2].as_choice().expect("choice");
		assert_eq!(blue.name, "Blue");
		assert_eq!(blue.value, json!(3));
		assert_eq!(blue.short, "B");
	}

	#[test]
	fn json_must_be_an_array() {
		assert!(parse_choices(r#"{"name": "red"}"#, InputFormat::Json).is_err());
	}

	#[test]
	fn file_input_reads_from_disk() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("colours.txt");
		fs::write(&path, "red\ngreen\n").expect("write");

		let items = load_choices(&ChoiceInput::File {
			path,
			format: InputFormat::Lines,
		})
		.expect("load");
		assert_eq!(items, vec![Choice::new("red").into(), Choice::new("green").into()]);
	}

	#[test]
	fn walk_lists_files_relative_to_the_root() {
		let dir = tempfile::tempdir().expect("tempdir");
		fs::create_dir_all(dir.path().join("nested/deeper")).expect("dirs");
		fs::write(dir.path().join("b.txt"), "").expect("write");
		fs::write(dir.path().join("nested/a.txt"), "").expect("write");
		fs::write(dir.path().join("nested/deeper/c.txt"), "").expect("write");
		fs::write(dir.path().join(".hidden"), "").expect("write");

		let names = |options: &WalkOptions| -> Vec<String> {
			walk_choices(options)
				.iter()
				.filter_map(|item| item.as_choice().map(|choice| choice.name.clone()))
				.collect()
		};

		let mut options = WalkOptions {
			root: dir.path().to_path_buf(),
			include_hidden: false,
			max_depth: None,
		};
		assert_eq!(
			names(&options),
			vec!["b.txt", "nested/a.txt", "nested/deeper/c.txt"]
		);

		options.max_depth = Some(2);
		assert_eq!(names(&options), vec!["b.txt", "nested/a.txt"]);

		options.max_depth = Some(1);
		options.include_hidden = true;
		assert_eq!(names(&options), vec![".hidden", "b.txt"]);
	}
}
