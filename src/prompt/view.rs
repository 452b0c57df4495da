use super::{CheckboxPrompt, PromptStatus};
use crate::choice::ChoiceItem;
use crate::render::{Body, ChoiceLine, LIST_HINT, RenderModel, SEARCH_HINT};

impl CheckboxPrompt {
	pub(crate) fn project(&self) -> RenderModel {
		let answered = self.status == PromptStatus::Answered;
		let show_hint = !answered && !(self.pipeline.first_load_completed() && self.interacted);
		let hint = show_hint.then_some(if self.options.searchable {
			SEARCH_HINT
		} else {
			LIST_HINT
		});

		let body = if answered {
			Body::Answered(self.selection.shorts())
		} else if self.pipeline.is_searching() {
			Body::Searching
		} else if self.choices.is_empty() {
			Body::NoResults
		} else {
			Body::Choices {
				lines: self.choice_lines(),
				active: self.choices.display_index(self.pointer).unwrap_or(0),
				page_size: self.options.page_size,
			}
		};

		RenderModel {
			message: self.options.message.clone(),
			hint,
			body,
			query: (self.options.searchable && !answered).then(|| self.line.clone()),
			error: self.error.clone(),
		}
	}

	fn choice_lines(&self) -> Vec<ChoiceLine> {
		let mut pointer = 0;
		self.choices
			.items()
			.iter()
			.map(|item| match item {
				ChoiceItem::Separator(line) => {
					ChoiceLine::Separator(ChoiceItem::separator_line(line.as_deref()))
				}
				ChoiceItem::Choice(choice) if !choice.is_selectable() => ChoiceLine::Disabled {
					name: choice.name.clone(),
					reason: choice.disabled.reason().unwrap_or("Disabled").to_string(),
				},
				ChoiceItem::Choice(choice) => {
					let pointed = pointer == self.pointer;
					pointer += 1;
					ChoiceLine::Choice {
						name: choice.name.clone(),
						checked: choice.checked,
						pointed,
						highlighted: pointed && self.options.highlight,
					}
				}
			})
			.collect()
	}
}
