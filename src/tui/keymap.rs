use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::prompt::PromptEvent;

/// What the host should do with a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum KeyAction {
	Prompt(PromptEvent),
	/// Feed the key to the query line.
	Edit,
	/// Put a literal space into the query line.
	InsertSpace,
	Cancel,
	Ignore,
}

/// Translate a key press. In search mode printable keys edit the query; in
/// list mode they drive the shortcuts.
///
/// Space always toggles, so a query gets its spaces from Alt-Space.
pub(crate) fn map_key(key: KeyEvent, searchable: bool) -> KeyAction {
	let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
	let alt = key.modifiers.contains(KeyModifiers::ALT);
	match key.code {
		KeyCode::Esc => KeyAction::Cancel,
		KeyCode::Char('c') if ctrl => KeyAction::Cancel,
		KeyCode::Enter => KeyAction::Prompt(PromptEvent::Submit),
		KeyCode::Up | KeyCode::BackTab => KeyAction::Prompt(PromptEvent::Up),
		KeyCode::Down | KeyCode::Tab => KeyAction::Prompt(PromptEvent::Down),
		KeyCode::Char('p') if ctrl => KeyAction::Prompt(PromptEvent::Up),
		KeyCode::Char('n') if ctrl => KeyAction::Prompt(PromptEvent::Down),
		KeyCode::Char(' ') if alt && searchable => KeyAction::InsertSpace,
		KeyCode::Char(' ') => KeyAction::Prompt(PromptEvent::Space),
		_ if searchable => KeyAction::Edit,
		KeyCode::Char('k') => KeyAction::Prompt(PromptEvent::Up),
		KeyCode::Char('j') => KeyAction::Prompt(PromptEvent::Down),
		KeyCode::Char('a') => KeyAction::Prompt(PromptEvent::SelectAll),
		KeyCode::Char('i') => KeyAction::Prompt(PromptEvent::Invert),
		KeyCode::Char(digit @ '1'..='9') => {
			KeyAction::Prompt(PromptEvent::Digit(digit as u8 - b'0'))
		}
		_ => KeyAction::Ignore,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn list_mode_maps_shortcuts() {
		assert_eq!(
			map_key(press(KeyCode::Char('a')), false),
			KeyAction::Prompt(PromptEvent::SelectAll)
		);
		assert_eq!(
			map_key(press(KeyCode::Char('7')), false),
			KeyAction::Prompt(PromptEvent::Digit(7))
		);
		assert_eq!(map_key(press(KeyCode::Char('0')), false), KeyAction::Ignore);
		assert_eq!(map_key(press(KeyCode::Backspace), false), KeyAction::Ignore);
	}

	#[test]
	fn search_mode_sends_printable_keys_to_the_query() {
		assert_eq!(map_key(press(KeyCode::Char('a')), true), KeyAction::Edit);
		assert_eq!(map_key(press(KeyCode::Char('7')), true), KeyAction::Edit);
		assert_eq!(map_key(press(KeyCode::Backspace), true), KeyAction::Edit);
		assert_eq!(
			map_key(press(KeyCode::Char(' ')), true),
			KeyAction::Prompt(PromptEvent::Space)
		);
	}

	#[test]
	fn alt_space_types_a_space_only_while_searching() {
		let alt_space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::ALT);
		assert_eq!(map_key(alt_space, true), KeyAction::InsertSpace);
		assert_eq!(
			map_key(alt_space, false),
			KeyAction::Prompt(PromptEvent::Space)
		);
	}

	#[test]
	fn cancel_and_submit_work_in_both_modes() {
		let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
		for searchable in [false, true] {
			assert_eq!(map_key(press(KeyCode::Esc), searchable), KeyAction::Cancel);
			assert_eq!(map_key(ctrl_c, searchable), KeyAction::Cancel);
			assert_eq!(
				map_key(press(KeyCode::Enter), searchable),
				KeyAction::Prompt(PromptEvent::Submit)
			);
		}
	}
}
