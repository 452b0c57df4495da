//! The checkbox prompt state machine.
//!
//! [`CheckboxPrompt`] owns every piece of widget state and is mutated only
//! through `&mut self` by whichever host drives it. Hosts talk to it through
//! the [`Prompt`] trait: feed it [`PromptEvent`]s, call [`Prompt::pump`] to
//! apply finished source fetches, draw [`Prompt::render_model`], and collect
//! the [`Answer`] once [`Prompt::is_complete`] reports true.

mod actions;
mod builder;
mod options;
mod search;
mod view;

use std::thread;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::choice::ChoiceSet;
use crate::error::PromptError;
use crate::render::RenderModel;
use crate::selection::Selection;
use crate::source::{Answers, QueryPipeline, Source, SourceRuntime};
use crate::validation::ValidationGate;

pub use builder::CheckboxUi;
pub use options::{DefaultEntry, NameMatcher, PromptOptions};

/// Input delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
	Up,
	Down,
	Space,
	Submit,
	/// Any edit of the query line; carries the full line text.
	Keypress { line: String },
	/// A digit key (1-based choice number). Ignored in search mode.
	Digit(u8),
	SelectAll,
	Invert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStatus {
	Active,
	Answered,
}

/// The submitted selection: values plus their compact display forms, in the
/// order they were checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
	pub values: Vec<Value>,
	pub shorts: Vec<String>,
}

/// Capabilities a host expects from an interactive prompt.
pub trait Prompt {
	type Output;

	/// Issue the initial source query.
	fn initialize(&mut self) -> Result<(), PromptError>;

	fn handle_event(&mut self, event: PromptEvent) -> Result<(), PromptError>;

	/// Apply any source results that arrived since the last call. Returns
	/// whether visible state changed.
	fn pump(&mut self) -> Result<bool, PromptError>;

	fn render_model(&self) -> RenderModel;

	fn is_complete(&self) -> bool;

	/// Hand over the result. Yields `Some` at most once.
	fn take_answer(&mut self) -> Option<Self::Output>;
}

/// Searchable checkbox list with bounded selection.
pub struct CheckboxPrompt {
	pub(crate) options: PromptOptions,
	pub(crate) source: Source,
	pub(crate) gate: ValidationGate,
	pub(crate) choices: ChoiceSet,
	pub(crate) selection: Selection,
	pub(crate) pending_default: Option<Vec<DefaultEntry>>,
	pub(crate) pipeline: QueryPipeline,
	pub(crate) runtime: Option<SourceRuntime>,
	pub(crate) pointer: usize,
	pub(crate) line: String,
	pub(crate) status: PromptStatus,
	pub(crate) error: Option<String>,
	pub(crate) answer: Option<Answer>,
	pub(crate) interacted: bool,
}

impl CheckboxPrompt {
	/// Build a prompt; fails when search mode is paired with a static source.
	pub fn new(
		options: PromptOptions,
		source: Source,
		answers: Answers,
		gate: ValidationGate,
	) -> Result<Self, PromptError> {
		if options.searchable && !source.is_callable() {
			return Err(PromptError::SearchRequiresCallable);
		}
		let runtime = match &source {
			Source::Callable(callable) => Some(SourceRuntime::spawn(callable.clone(), answers)),
			Source::Static(_) => None,
		};
		let pending_default = options.default.clone();

		Ok(Self {
			options,
			source,
			gate,
			choices: ChoiceSet::default(),
			selection: Selection::new(),
			pending_default,
			pipeline: QueryPipeline::new(),
			runtime,
			pointer: 0,
			line: String::new(),
			status: PromptStatus::Active,
			error: None,
			answer: None,
			interacted: false,
		})
	}

	#[must_use]
	pub fn options(&self) -> &PromptOptions {
		&self.options
	}

	#[must_use]
	pub fn choices(&self) -> &ChoiceSet {
		&self.choices
	}

	#[must_use]
	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	#[must_use]
	pub fn pointer(&self) -> usize {
		self.pointer
	}

	#[must_use]
	pub fn status(&self) -> PromptStatus {
		self.status
	}

	#[must_use]
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	#[must_use]
	pub fn is_searching(&self) -> bool {
		self.pipeline.is_searching()
	}

	/// Block until the current query resolves or `timeout` elapses.
	pub fn wait_for_results(&mut self, timeout: Duration) -> Result<(), PromptError> {
		let deadline = Instant::now() + timeout;
		while self.pipeline.is_searching() && Instant::now() < deadline {
			self.pump()?;
			if !self.pipeline.is_searching() {
				break;
			}
			thread::sleep(Duration::from_millis(5));
		}
		Ok(())
	}
}

impl Prompt for CheckboxPrompt {
	type Output = Answer;

	fn initialize(&mut self) -> Result<(), PromptError> {
		self.execute_query()
	}

	fn handle_event(&mut self, event: PromptEvent) -> Result<(), PromptError> {
		self.dispatch_event(event)
	}

	fn pump(&mut self) -> Result<bool, PromptError> {
		self.pump_source_results()
	}

	fn render_model(&self) -> RenderModel {
		self.project()
	}

	fn is_complete(&self) -> bool {
		self.status == PromptStatus::Answered
	}

	fn take_answer(&mut self) -> Option<Answer> {
		self.answer.take()
	}
}

impl Drop for CheckboxPrompt {
	fn drop(&mut self) {
		if let Some(runtime) = &self.runtime {
			runtime.shutdown();
		}
	}
}
