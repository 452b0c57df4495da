use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::worker::{self, SourceCommand, SourceResult};
use super::{Answers, ChoiceSource, QueryTicket};

/// Prompt-side handle to the source worker.
pub(crate) struct SourceRuntime {
	tx: Sender<SourceCommand>,
	rx: Receiver<SourceResult>,
	latest_query_id: Arc<AtomicU64>,
}

impl SourceRuntime {
	pub(crate) fn spawn(source: Arc<dyn ChoiceSource>, answers: Answers) -> Self {
		let (tx, rx, latest_query_id) = worker::spawn(source, answers);
		Self {
			tx,
			rx,
			latest_query_id,
		}
	}

	/// Hand `ticket` to the worker, marking it as the newest generation first.
	pub(crate) fn dispatch(&self, ticket: &QueryTicket) {
		self.latest_query_id
			.store(ticket.generation, AtomicOrdering::Release);
		let _ = self.tx.send(SourceCommand::Fetch {
			id: ticket.generation,
			query: ticket.query.clone(),
		});
	}

	pub(crate) fn try_recv(&self) -> Result<SourceResult, TryRecvError> {
		self.rx.try_recv()
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SourceCommand::Shutdown);
	}
}
