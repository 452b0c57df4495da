use super::{Answer, CheckboxPrompt, PromptEvent, PromptStatus};
use crate::error::PromptError;

impl CheckboxPrompt {
	pub(crate) fn dispatch_event(&mut self, event: PromptEvent) -> Result<(), PromptError> {
		if self.status == PromptStatus::Answered {
			return Ok(());
		}
		self.error = None;
		self.interacted = true;

		let searchable = self.options.searchable;
		match event {
			PromptEvent::Up => self.move_up(),
			PromptEvent::Down => self.move_down(),
			PromptEvent::Space => self.toggle_pointed(),
			PromptEvent::Digit(digit) if !searchable => self.jump_to(digit),
			PromptEvent::SelectAll if !searchable => self.toggle_all(),
			PromptEvent::Invert if !searchable => self.invert(),
			PromptEvent::Keypress { line } if searchable => {
				self.line = line;
				self.execute_query()?;
			}
			PromptEvent::Submit => self.submit(),
			PromptEvent::Digit(_)
			| PromptEvent::SelectAll
			| PromptEvent::Invert
			| PromptEvent::Keypress { .. } => {}
		}
		Ok(())
	}

	fn move_up(&mut self) {
		let len = self.choices.real_len();
		if len == 0 {
			return;
		}
		self.pointer = if self.pointer == 0 {
			len - 1
		} else {
			self.pointer - 1
		};
	}

	fn move_down(&mut self) {
		let len = self.choices.real_len();
		if len == 0 {
			return;
		}
		self.pointer = (self.pointer + 1) % len;
	}

	fn toggle_pointed(&mut self) {
		self.toggle_at(self.pointer, None);
	}

	/// Toggle the selectable choice at `pointer`, then bring every other
	/// choice sharing its value in line.
	fn toggle_at(&mut self, pointer: usize, checked: Option<bool>) {
		let Some(choice) = self.choices.get_mut(pointer) else {
			return;
		};
		self.selection.toggle(choice, checked);
		let (value, checked) = (choice.value.clone(), choice.checked);
		self.choices.set_checked_by_value(&value, checked);
	}

	/// Digits are 1-based; anything past the list is ignored.
	fn jump_to(&mut self, digit: u8) {
		let index = usize::from(digit);
		if index == 0 || index > self.choices.real_len() {
			return;
		}
		self.pointer = index - 1;
		self.toggle_pointed();
	}

	/// Check everything unless everything is already checked.
	fn toggle_all(&mut self) {
		let check = self.choices.selectable().any(|choice| !choice.checked);
		for pointer in 0..self.choices.real_len() {
			// Already there; re-toggling would move it to the end of the answer.
			if self.choices.get(pointer).is_some_and(|choice| choice.checked == check) {
				continue;
			}
			self.toggle_at(pointer, Some(check));
		}
	}

	/// Flip each value once, however many choices carry it.
	fn invert(&mut self) {
		let targets: Vec<(usize, bool)> = self
			.choices
			.selectable()
			.enumerate()
			.map(|(pointer, choice)| (pointer, !choice.checked))
			.collect();
		let mut flipped = Vec::new();
		for (pointer, checked) in targets {
			let Some(value) = self.choices.get(pointer).map(|choice| choice.value.clone()) else {
				continue;
			};
			if flipped.contains(&value) {
				continue;
			}
			self.toggle_at(pointer, Some(checked));
			flipped.push(value);
		}
	}

	fn submit(&mut self) {
		match self.gate.validate(self.selection.values()) {
			Ok(()) => {
				tracing::info!(checked = self.selection.len(), "prompt answered");
				self.answer = Some(Answer {
					values: self.selection.values().to_vec(),
					shorts: self.selection.shorts(),
				});
				self.status = PromptStatus::Answered;
			}
			Err(message) => {
				tracing::debug!(%message, "submission rejected");
				self.error = Some(message);
			}
		}
	}
}
