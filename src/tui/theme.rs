use ratatui::style::{Color, Modifier, Style};

/// Styles applied to the prompt's pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
	/// Question text.
	pub header: Style,
	/// Pointed row.
	pub row_highlight: Style,
	/// `?` marker, pointer, and search label.
	pub prompt: Style,
	/// Hints, separators, disabled rows, and status lines.
	pub empty: Style,
	/// Checked boxes and the submitted answer.
	pub highlight: Style,
	pub error: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	/// Look up a built-in theme, ignoring case.
	#[must_use]
	pub fn by_name(name: &str) -> Option<Self> {
		BUILTINS
			.iter()
			.find(|(builtin, _)| builtin.eq_ignore_ascii_case(name.trim()))
			.map(|(_, theme)| *theme)
	}

	/// Names of the built-in themes.
	#[must_use]
	pub fn names() -> Vec<&'static str> {
		BUILTINS.iter().map(|(name, _)| *name).collect()
	}
}

impl Default for Theme {
	fn default() -> Self {
		DARK
	}
}

pub const DARK: Theme = Theme {
	header: Style::new().add_modifier(Modifier::BOLD),
	row_highlight: Style::new().fg(Color::Cyan),
	prompt: Style::new().fg(Color::Green),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Red),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new()
		.bg(Color::Rgb(226, 232, 240))
		.fg(Color::Rgb(0, 102, 153)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(180, 30, 30)),
};

pub const PLAIN: Theme = Theme {
	header: Style::new(),
	row_highlight: Style::new().add_modifier(Modifier::REVERSED),
	prompt: Style::new(),
	empty: Style::new(),
	highlight: Style::new().add_modifier(Modifier::BOLD),
	error: Style::new().add_modifier(Modifier::BOLD),
};

const BUILTINS: &[(&str, Theme)] = &[("dark", DARK), ("light", LIGHT), ("plain", PLAIN)];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_ignores_case() {
		assert_eq!(Theme::by_name("Light"), Some(LIGHT));
		assert_eq!(Theme::by_name(" plain "), Some(PLAIN));
		assert_eq!(Theme::by_name("neon"), None);
	}

	#[test]
	fn default_theme_is_listed() {
		assert_eq!(Theme::names(), ["dark", "light", "plain"]);
		assert_eq!(Theme::default(), DARK);
	}
}
