use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use throbber_widgets_tui::ThrobberState;

use super::Theme;
use super::draw::{DrawContext, draw};
use super::input::QueryInput;
use super::keymap::{KeyAction, map_key};
use crate::error::PromptError;
use crate::prompt::{Prompt, PromptEvent};

/// Run `prompt` in the terminal with the default theme.
pub fn run<P: Prompt>(prompt: P) -> Result<Option<P::Output>, PromptError> {
	run_with_theme(prompt, &Theme::default())
}

/// Run `prompt` in the terminal until it is answered (`Some`) or cancelled
/// (`None`).
pub fn run_with_theme<P: Prompt>(
	prompt: P,
	theme: &Theme,
) -> Result<Option<P::Output>, PromptError> {
	let mut host = Host::new(prompt, theme);
	host.run()
}

enum Exit {
	Answered,
	Cancelled,
}

struct Host<'t, P> {
	prompt: P,
	searchable: bool,
	input: QueryInput<'static>,
	theme: &'t Theme,
	throbber_state: ThrobberState,
}

impl<'t, P: Prompt> Host<'t, P> {
	fn new(prompt: P, theme: &'t Theme) -> Self {
		let searchable = prompt.render_model().query.is_some();
		Self {
			prompt,
			searchable,
			input: QueryInput::new(),
			theme,
			throbber_state: ThrobberState::default(),
		}
	}

	/// Pump the terminal event loop until the prompt finishes.
	fn run(&mut self) -> Result<Option<P::Output>, PromptError> {
		self.prompt.initialize()?;

		let mut terminal = ratatui::init();
		terminal.clear()?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> io::Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<Exit, PromptError> = 'event_loop: loop {
			if let Err(err) = self.prompt.pump() {
				break Err(err);
			}
			self.throbber_state.calc_next();

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(PromptError::Terminal(io::Error::other(
							"input event channel disconnected",
						)));
					}
				}
			}

			let mut maybe_exit = None;
			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
				{
					match self.handle_key(key) {
						Ok(Some(exit)) => {
							maybe_exit = Some(exit);
							break;
						}
						Ok(None) => {}
						Err(err) => break 'event_loop Err(err),
					}
				}
			}

			let model = self.prompt.render_model();
			let drawn = terminal.draw(|frame| {
				draw(
					frame,
					DrawContext {
						model: &model,
						input: &self.input,
						theme: self.theme,
						throbber_state: &self.throbber_state,
					},
				);
			});
			if let Err(err) = drawn {
				break Err(err.into());
			}

			if let Some(exit) = maybe_exit {
				break Ok(exit);
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		match result? {
			Exit::Answered => Ok(self.prompt.take_answer()),
			Exit::Cancelled => {
				tracing::info!("prompt cancelled");
				Ok(None)
			}
		}
	}

	fn handle_key(&mut self, key: KeyEvent) -> Result<Option<Exit>, PromptError> {
		match map_key(key, self.searchable) {
			KeyAction::Cancel => return Ok(Some(Exit::Cancelled)),
			KeyAction::Ignore => {}
			KeyAction::Edit => {
				if self.input.input(key) {
					self.send_query()?;
				}
			}
			KeyAction::InsertSpace => {
				self.input.insert_char(' ');
				self.send_query()?;
			}
			KeyAction::Prompt(event) => {
				self.prompt.handle_event(event)?;
				if self.prompt.is_complete() {
					return Ok(Some(Exit::Answered));
				}
			}
		}
		Ok(None)
	}

	fn send_query(&mut self) -> Result<(), PromptError> {
		let line = self.input.text().to_string();
		self.prompt.handle_event(PromptEvent::Keypress { line })
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	use super::*;
	use crate::choice::ChoiceItem;
	use crate::prompt::CheckboxUi;
	use crate::source::Answers;

	fn searching_host(theme: &Theme) -> Host<'_, crate::prompt::CheckboxPrompt> {
		let prompt = CheckboxUi::new("City")
			.searchable(true)
			.with_source_fn(
				|_: &Answers, _: Option<&str>| -> anyhow::Result<Vec<ChoiceItem>> {
					Ok(vec!["new york".into(), "newark".into()])
				},
			)
			.build()
			.expect("prompt");
		Host::new(prompt, theme)
	}

	#[test]
	fn search_mode_is_read_once_from_the_prompt() {
		let theme = Theme::default();
		assert!(searching_host(&theme).searchable);

		let list = CheckboxUi::new("Pick")
			.with_choices(["a"])
			.build()
			.expect("prompt");
		assert!(!Host::new(list, &theme).searchable);
	}

	#[test]
	fn alt_space_extends_the_query_with_a_space() {
		let theme = Theme::default();
		let mut host = searching_host(&theme);
		host.prompt.initialize().expect("initialize");

		for c in "new".chars() {
			let exit = host
				.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
				.expect("key");
			assert!(exit.is_none());
		}
		host.handle_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::ALT))
			.expect("alt space");
		host.handle_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE))
			.expect("key");

		assert_eq!(host.input.text(), "new y");
		assert_eq!(host.prompt.render_model().query.as_deref(), Some("new y"));
	}
}
