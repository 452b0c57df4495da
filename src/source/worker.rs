use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::{Answers, ChoiceSource};
use crate::choice::ChoiceItem;

pub(crate) enum SourceCommand {
	Fetch { id: u64, query: Option<String> },
	Shutdown,
}

pub(crate) struct SourceResult {
	pub(crate) id: u64,
	pub(crate) query: Option<String>,
	pub(crate) outcome: anyhow::Result<Vec<ChoiceItem>>,
}

/// Launches the background fetch thread and returns its channels plus the
/// shared latest-generation marker.
pub(crate) fn spawn(
	source: Arc<dyn ChoiceSource>,
	answers: Answers,
) -> (Sender<SourceCommand>, Receiver<SourceResult>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::Builder::new()
		.name("checksift-source".into())
		.spawn(move || worker_loop(source.as_ref(), &answers, command_rx, result_tx, &thread_latest))
		.map_err(|err| tracing::error!(%err, "failed to spawn choice source worker"))
		.ok();

	(command_tx, result_rx, latest_query_id)
}

fn worker_loop(
	source: &dyn ChoiceSource,
	answers: &Answers,
	command_rx: Receiver<SourceCommand>,
	result_tx: Sender<SourceResult>,
	latest_query_id: &AtomicU64,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(source, answers, &result_tx, latest_query_id, command) {
			break;
		}
	}
}

fn handle_command(
	source: &dyn ChoiceSource,
	answers: &Answers,
	result_tx: &Sender<SourceResult>,
	latest_query_id: &AtomicU64,
	command: SourceCommand,
) -> bool {
	match command {
		SourceCommand::Fetch { id, query } => {
			// Queued behind a slow fetch and already replaced by a newer query.
			if id < latest_query_id.load(Ordering::Acquire) {
				tracing::trace!(id, "skipping superseded fetch before it starts");
				return true;
			}
			let outcome = source.fetch(answers, query.as_deref());
			result_tx.send(SourceResult { id, query, outcome }).is_ok()
		}
		SourceCommand::Shutdown => false,
	}
}
