/// A query that passed the no-op check and must be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
	pub generation: u64,
	/// Trimmed query text, or `None` when search is disabled.
	pub query: Option<String>,
}

/// Bookkeeping for issued queries: de-duplication, generations, and the
/// searching flag.
#[derive(Debug, Default)]
pub struct QueryPipeline {
	last_query: Option<String>,
	next_generation: u64,
	current: Option<u64>,
	searching: bool,
	first_load_completed: bool,
}

impl QueryPipeline {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a new query, superseding any outstanding one.
	///
	/// Returns `None` when the trimmed text matches the previous query. With
	/// `searchable` off the ticket carries no query text.
	pub fn issue(&mut self, raw: &str, searchable: bool) -> Option<QueryTicket> {
		let normalized = raw.trim();
		if self.last_query.as_deref() == Some(normalized) {
			return None;
		}
		self.last_query = Some(normalized.to_string());

		self.next_generation = self.next_generation.saturating_add(1);
		let generation = self.next_generation;
		self.current = Some(generation);
		self.searching = true;

		Some(QueryTicket {
			generation,
			query: searchable.then(|| normalized.to_string()),
		})
	}

	#[must_use]
	pub fn is_current(&self, generation: u64) -> bool {
		self.current == Some(generation)
	}

	/// Mark `generation` as resolved. Returns `false` for superseded generations,
	/// whose data must be dropped.
	pub fn complete(&mut self, generation: u64) -> bool {
		if !self.is_current(generation) {
			return false;
		}
		self.searching = false;
		self.first_load_completed = true;
		true
	}

	#[must_use]
	pub fn current_generation(&self) -> Option<u64> {
		self.current
	}

	#[must_use]
	pub fn is_searching(&self) -> bool {
		self.searching
	}

	#[must_use]
	pub fn first_load_completed(&self) -> bool {
		self.first_load_completed
	}

	#[must_use]
	pub fn last_query(&self) -> Option<&str> {
		self.last_query.as_deref()
	}
}
