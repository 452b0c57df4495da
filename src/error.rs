use thiserror::Error;

/// Errors surfaced by the checkbox prompt and its hosts.
#[derive(Debug, Error)]
pub enum PromptError {
	/// The prompt was built without a choice source.
	#[error("a choice source is required")]
	MissingSource,

	/// Search mode re-queries on every keystroke and cannot work from a fixed list.
	#[error("search mode requires a callable source, not a static list of choices")]
	SearchRequiresCallable,

	/// The source failed while producing choices for the current query.
	#[error("choice source failed for query {query:?}")]
	Source {
		query: Option<String>,
		#[source]
		source: anyhow::Error,
	},

	/// The background worker hung up before answering the current query.
	#[error("choice source worker disconnected")]
	WorkerDisconnected,

	/// Terminal setup, drawing, or event polling failed.
	#[error("terminal error")]
	Terminal(#[from] std::io::Error),
}

impl PromptError {
	pub fn source_failed(query: Option<String>, source: anyhow::Error) -> Self {
		Self::Source { query, source }
	}

	/// Whether the error stems from how the prompt was configured.
	#[must_use]
	pub fn is_configuration(&self) -> bool {
		matches!(self, Self::MissingSource | Self::SearchRequiresCallable)
	}
}
