use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use super::Theme;
use super::input::QueryInput;
use crate::render::{
	Body, CHECKED, ChoiceLine, PAGINATION_FOOTER, POINTER, RenderModel, UNCHECKED, page_window,
};

const SEARCH_LABEL: &str = "  Search: ";

/// Everything needed to paint one frame.
pub(crate) struct DrawContext<'a, 'b> {
	pub(crate) model: &'a RenderModel,
	pub(crate) input: &'a QueryInput<'b>,
	pub(crate) theme: &'a Theme,
	pub(crate) throbber_state: &'a ThrobberState,
}

pub(crate) fn draw(frame: &mut Frame, ctx: DrawContext<'_, '_>) {
	let DrawContext {
		model,
		input,
		theme,
		throbber_state,
	} = ctx;

	let mut constraints = vec![Constraint::Length(1), Constraint::Min(0)];
	if model.query.is_some() {
		constraints.push(Constraint::Length(1));
	}
	if model.error.is_some() {
		constraints.push(Constraint::Length(1));
	}
	let rows = Layout::default()
		.direction(Direction::Vertical)
		.constraints(constraints)
		.split(frame.area());

	frame.render_widget(Paragraph::new(header_line(model, theme)), rows[0]);
	frame.render_widget(
		Paragraph::new(body_lines(&model.body, theme, throbber_state)),
		rows[1],
	);

	let mut next = 2;
	if model.query.is_some() {
		render_search_row(frame, rows[next], input, theme);
		next += 1;
	}
	if let Some(error) = &model.error {
		let line = Line::styled(format!(">> {error}"), theme.error_style());
		frame.render_widget(Paragraph::new(line), rows[next]);
	}
}

fn header_line<'a>(model: &'a RenderModel, theme: &Theme) -> Line<'a> {
	let mut spans = vec![
		Span::styled("? ", theme.prompt_style()),
		Span::styled(model.message.as_str(), theme.header_style()),
	];
	if let Some(hint) = model.hint {
		spans.push(Span::styled(format!(" {hint}"), theme.empty_style()));
	}
	if let Body::Answered(shorts) = &model.body {
		spans.push(Span::styled(
			format!(" {}", shorts.join(", ")),
			theme.highlight_style(),
		));
	}
	Line::from(spans)
}

fn body_lines<'a>(body: &'a Body, theme: &Theme, throbber_state: &ThrobberState) -> Vec<Line<'a>> {
	match body {
		Body::Answered(_) => Vec::new(),
		Body::Searching => {
			let spinner = Throbber::default()
				.style(theme.empty_style())
				.throbber_style(theme.prompt_style());
			vec![Line::from(vec![
				Span::raw("  "),
				spinner.to_symbol_span(throbber_state),
				Span::styled("Searching...", theme.empty_style()),
			])]
		}
		Body::NoResults => vec![Line::styled("  No results...", theme.empty_style())],
		Body::Choices {
			lines,
			active,
			page_size,
		} => {
			let mut rendered: Vec<Line<'a>> = page_window(lines.len(), *active, *page_size)
				.into_iter()
				.map(|index| choice_line(&lines[index], theme))
				.collect();
			if lines.len() > *page_size {
				rendered.push(Line::styled(PAGINATION_FOOTER, theme.empty_style()));
			}
			rendered
		}
	}
}

fn choice_line<'a>(line: &'a ChoiceLine, theme: &Theme) -> Line<'a> {
	match line {
		ChoiceLine::Separator(text) => Line::styled(format!(" {text}"), theme.empty_style()),
		ChoiceLine::Disabled { name, reason } => {
			Line::styled(format!(" - {name} ({reason})"), theme.empty_style())
		}
		ChoiceLine::Choice {
			name,
			checked,
			pointed,
			highlighted,
		} => {
			let pointer = if *pointed { POINTER } else { " " };
			let checkbox = if *checked {
				Span::styled(CHECKED, theme.highlight_style())
			} else {
				Span::raw(UNCHECKED)
			};
			let label = if *highlighted {
				Span::styled(name.as_str(), theme.row_highlight_style())
			} else {
				Span::raw(name.as_str())
			};
			Line::from(vec![
				Span::styled(pointer, theme.prompt_style()),
				checkbox,
				Span::raw(" "),
				label,
			])
		}
	}
}

fn render_search_row(frame: &mut Frame, area: Rect, input: &QueryInput<'_>, theme: &Theme) {
	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(u16::try_from(SEARCH_LABEL.width()).unwrap_or(u16::MAX)),
			Constraint::Min(1),
		])
		.split(area);
	frame.render_widget(
		Paragraph::new(Span::styled(SEARCH_LABEL, theme.prompt_style())),
		columns[0],
	);
	input.render(frame, columns[1], theme.header_style());
}
