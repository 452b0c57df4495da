//! Searchable checkbox prompt for the terminal.
//!
//! The crate is split into a host-agnostic core and a `ratatui` host. The core
//! ([`prompt::CheckboxPrompt`]) owns every piece of widget state: the choice
//! list, the checked selection, the query pipeline that re-runs the caller's
//! [`Source`] on each keystroke, and the validation gate that guards submit.
//! Hosts drive it through the [`Prompt`] trait; [`tui::run`] is the bundled
//! terminal host and [`CheckboxUi`] is the builder most embedders want.
//!
//! In the terminal host Space toggles in both modes; while searching,
//! Alt-Space types a space into the query instead.

pub mod app_dirs;
pub mod choice;
pub mod error;
pub mod fuzzy;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod selection;
pub mod source;
pub mod tui;
pub mod validation;

pub use choice::{Choice, ChoiceItem, ChoiceSet, Disabled};
pub use error::PromptError;
pub use prompt::{
	Answer, CheckboxPrompt, CheckboxUi, DefaultEntry, Prompt, PromptEvent, PromptOptions,
	PromptStatus,
};
pub use render::{RenderModel, Screen, paginate};
pub use selection::Selection;
pub use source::{Answers, ChoiceSource, Source};
pub use tui::{Theme, run};
pub use validation::{Bound, ValidationGate, Validator};
