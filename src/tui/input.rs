use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Single-line query editor.
pub(crate) struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl QueryInput<'_> {
	pub(crate) fn new() -> Self {
		let mut textarea = TextArea::default();
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text("type to filter");
		Self { textarea }
	}

	/// Apply a key; returns whether the text changed.
	pub(crate) fn input(&mut self, key: KeyEvent) -> bool {
		let before = self.text().to_string();
		self.textarea.input(key);
		// Ctrl-M and friends insert line breaks; the query stays on one line.
		if self.textarea.lines().len() > 1 {
			self.textarea.undo();
		}
		self.text() != before
	}

	/// Insert `c` at the cursor.
	pub(crate) fn insert_char(&mut self, c: char) {
		self.textarea.insert_char(c);
	}

	pub(crate) fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	pub(crate) fn render(&self, frame: &mut Frame, area: Rect, style: Style) {
		let mut textarea = self.textarea.clone();
		textarea.set_style(style);
		frame.render_widget(&textarea, area);
	}
}
