use std::sync::mpsc::TryRecvError;

use super::CheckboxPrompt;
use crate::choice::{ChoiceItem, ChoiceSet};
use crate::error::PromptError;
use crate::source::{Source, SourceResult};

impl CheckboxPrompt {
	/// Issue a fetch for the current line unless it matches the last query.
	pub(crate) fn execute_query(&mut self) -> Result<(), PromptError> {
		let Some(ticket) = self.pipeline.issue(&self.line, self.options.searchable) else {
			tracing::trace!(line = %self.line, "query unchanged; not fetching");
			return Ok(());
		};
		tracing::debug!(
			generation = ticket.generation,
			query = ?ticket.query,
			"issuing choice query"
		);

		match &self.source {
			Source::Static(items) => {
				let items = items.clone();
				self.apply_choices(ticket.generation, items);
			}
			Source::Callable(_) => match &self.runtime {
				Some(runtime) => runtime.dispatch(&ticket),
				None => return Err(PromptError::WorkerDisconnected),
			},
		}
		Ok(())
	}

	/// Drain finished fetches waiting on the worker channel.
	pub(crate) fn pump_source_results(&mut self) -> Result<bool, PromptError> {
		let mut applied = false;
		loop {
			let Some(runtime) = &self.runtime else {
				break;
			};
			match runtime.try_recv() {
				Ok(result) => applied |= self.handle_source_result(result)?,
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					if self.pipeline.is_searching() {
						return Err(PromptError::WorkerDisconnected);
					}
					break;
				}
			}
		}
		Ok(applied)
	}

	/// Apply a fetch result if it belongs to the most recent query.
	pub(crate) fn handle_source_result(
		&mut self,
		result: SourceResult,
	) -> Result<bool, PromptError> {
		if !self.pipeline.is_current(result.id) {
			tracing::trace!(id = result.id, "discarding stale fetch result");
			return Ok(false);
		}

		match result.outcome {
			Ok(items) => {
				self.apply_choices(result.id, items);
				Ok(true)
			}
			Err(err) => {
				self.pipeline.complete(result.id);
				tracing::warn!(query = ?result.query, error = %err, "choice source failed");
				Err(PromptError::source_failed(result.query, err))
			}
		}
	}

	/// Replace the visible list, carrying over checked state by value and
	/// applying the initial defaults on the first completed fetch.
	fn apply_choices(&mut self, generation: u64, items: Vec<ChoiceItem>) {
		if !self.pipeline.complete(generation) {
			return;
		}

		let mut choices = ChoiceSet::new(items);
		if let Some(defaults) = self.pending_default.take() {
			for choice in choices.choices_mut() {
				let wanted = choice.is_selectable()
					&& !self.selection.contains(&choice.value)
					&& defaults.iter().any(|entry| entry.matches(choice));
				if wanted {
					self.selection.toggle(choice, Some(true));
				}
			}
		}
		for choice in choices.choices_mut() {
			self.selection.restore(choice);
		}

		tracing::debug!(
			generation,
			total = choices.len(),
			selectable = choices.real_len(),
			checked = self.selection.len(),
			"applied choices"
		);
		self.choices = choices;
		self.pointer = 0;
	}
}
