//! Display projection of the prompt state.
//!
//! [`RenderModel`] is a plain description of what should be on screen. The
//! terminal host styles it line by line; [`RenderModel::screen`] flattens it to
//! the `(message, bottom)` text pair used by line-oriented hosts and tests.

use std::fmt;

pub const POINTER: &str = "❯";
pub const CHECKED: &str = "◉";
pub const UNCHECKED: &str = "◯";
pub const PAGINATION_FOOTER: &str = "(Move up and down to reveal more choices)";
pub const SEARCH_HINT: &str = "(Press <space> to select, or type anything to filter the list)";
pub const LIST_HINT: &str = "(Press <space> to select, <a> to toggle all, <i> to invert selection)";

/// One rendered entry of the choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceLine {
	Separator(String),
	Disabled {
		name: String,
		reason: String,
	},
	Choice {
		name: String,
		checked: bool,
		pointed: bool,
		highlighted: bool,
	},
}

impl fmt::Display for ChoiceLine {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Separator(line) => write!(f, " {line}"),
			Self::Disabled { name, reason } => write!(f, " - {name} ({reason})"),
			Self::Choice {
				name,
				checked,
				pointed,
				..
			} => {
				let pointer = if *pointed { POINTER } else { " " };
				let checkbox = if *checked { CHECKED } else { UNCHECKED };
				write!(f, "{pointer}{checkbox} {name}")
			}
		}
	}
}

/// Main area below the question line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
	Answered(Vec<String>),
	Searching,
	NoResults,
	Choices {
		lines: Vec<ChoiceLine>,
		/// Index into `lines` of the pointed choice.
		active: usize,
		page_size: usize,
	},
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
	pub message: String,
	pub hint: Option<&'static str>,
	pub body: Body,
	/// Current filter text, present only while a searchable prompt is active.
	pub query: Option<String>,
	pub error: Option<String>,
}

/// Text pair handed to a line-oriented screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
	pub message: String,
	pub bottom: String,
}

impl RenderModel {
	/// Question line, including the hint or the submitted answer.
	#[must_use]
	pub fn header(&self) -> String {
		let mut header = format!("? {}", self.message);
		if let Some(hint) = self.hint {
			header.push(' ');
			header.push_str(hint);
		}
		if let Body::Answered(shorts) = &self.body {
			header.push(' ');
			header.push_str(&shorts.join(", "));
		}
		header
	}

	#[must_use]
	pub fn screen(&self) -> Screen {
		let mut message = self.header();
		match &self.body {
			Body::Answered(_) => {}
			Body::Searching => message.push_str("\n  Searching..."),
			Body::NoResults => message.push_str("\n  No results..."),
			Body::Choices {
				lines,
				active,
				page_size,
			} => {
				let rendered = lines
					.iter()
					.map(ToString::to_string)
					.collect::<Vec<_>>()
					.join("\n");
				message.push('\n');
				message.push_str(&paginate(&rendered, *active, *page_size));
			}
		}
		if let Some(query) = &self.query {
			message.push_str("\n  Search: ");
			message.push_str(query);
		}
		let bottom = self
			.error
			.as_ref()
			.map(|error| format!(">> {error}"))
			.unwrap_or_default();
		Screen { message, bottom }
	}
}

impl fmt::Display for RenderModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let screen = self.screen();
		f.write_str(&screen.message)?;
		if !screen.bottom.is_empty() {
			write!(f, "\n{}", screen.bottom)?;
		}
		Ok(())
	}
}

/// Line indexes visible in a page of `page_size` rows around `active`.
///
/// Long lists wrap around so the window scrolls endlessly in both directions;
/// the active row sits at the top until it reaches the middle of the page and
/// stays there afterwards. Lists that fit are returned whole.
#[must_use]
pub fn page_window(len: usize, active: usize, page_size: usize) -> Vec<usize> {
	if len <= page_size || page_size == 0 {
		return (0..len).collect();
	}
	let middle = page_size / 2;
	let offset = active.min(middle);
	let top = (active % len + len - offset) % len;
	(0..page_size).map(|row| (top + row) % len).collect()
}

/// Window a newline-separated list to `page_size` rows around `active`.
#[must_use]
pub fn paginate(rendered: &str, active: usize, page_size: usize) -> String {
	let lines: Vec<&str> = rendered.split('\n').collect();
	if lines.len() <= page_size {
		return rendered.to_string();
	}
	let mut section = page_window(lines.len(), active, page_size)
		.into_iter()
		.map(|index| lines[index])
		.collect::<Vec<_>>()
		.join("\n");
	section.push('\n');
	section.push_str(PAGINATION_FOOTER);
	section
}
