//! Terminal host for prompts.
//!
//! The host owns the terminal, the query line editor, and the spinner. It
//! translates key presses into prompt events and repaints from the prompt's
//! render model every tick.

mod draw;
mod input;
mod keymap;
mod runtime;
pub mod theme;

pub use runtime::{run, run_with_theme};
pub use theme::Theme;
