//! Choice sources and the query pipeline that feeds them.
//!
//! A callable source runs on a background worker (see [`worker`]); every query
//! is tagged with a generation from [`QueryPipeline`] and a result is only
//! applied when its generation is still the latest one issued.

mod pipeline;
mod runtime;
mod worker;

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::choice::ChoiceItem;

pub use pipeline::{QueryPipeline, QueryTicket};
pub(crate) use runtime::SourceRuntime;
pub(crate) use worker::{SourceCommand, SourceResult};

/// Answers collected by earlier prompts, handed to the source on every fetch.
pub type Answers = Map<String, Value>;

/// Produces choices for a query.
///
/// `query` is `None` when search is disabled, otherwise the trimmed input line.
pub trait ChoiceSource: Send + Sync {
	fn fetch(&self, answers: &Answers, query: Option<&str>) -> anyhow::Result<Vec<ChoiceItem>>;
}

impl<F> ChoiceSource for F
where
	F: Fn(&Answers, Option<&str>) -> anyhow::Result<Vec<ChoiceItem>> + Send + Sync,
{
	fn fetch(&self, answers: &Answers, query: Option<&str>) -> anyhow::Result<Vec<ChoiceItem>> {
		self(answers, query)
	}
}

/// Where the prompt's choices come from.
#[derive(Clone)]
pub enum Source {
	/// A fixed list, applied as soon as it is requested.
	Static(Vec<ChoiceItem>),
	/// A callable re-run for every distinct query.
	Callable(Arc<dyn ChoiceSource>),
}

impl Source {
	pub fn callable<S>(source: S) -> Self
	where
		S: ChoiceSource + 'static,
	{
		Self::Callable(Arc::new(source))
	}

	pub fn fixed<I, T>(items: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<ChoiceItem>,
	{
		Self::Static(items.into_iter().map(Into::into).collect())
	}

	#[must_use]
	pub fn is_callable(&self) -> bool {
		matches!(self, Self::Callable(_))
	}
}

impl fmt::Debug for Source {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Static(items) => f.debug_tuple("Static").field(&items.len()).finish(),
			Self::Callable(_) => f.write_str("Callable"),
		}
	}
}
