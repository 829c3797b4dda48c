//! Clipboard export of the composed master prompt.
//!
//! The host clipboard is reached through [`ClipboardSink`]. Writes run on a
//! worker thread so the caller's event loop keeps turning; the outcome is
//! delivered once through a [`PendingExport`]. Nothing is retried.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread;

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
	/// Export was requested with nothing to copy. The sink is never called.
	#[error("nothing to copy: the master prompt is empty")]
	EmptyText,
	#[error("clipboard is unavailable: {0}")]
	Unavailable(String),
	#[error("failed to write to the clipboard: {0}")]
	WriteFailed(String),
	#[error("clipboard worker exited without reporting an outcome")]
	WorkerLost,
}

/// The host's text clipboard.
pub trait ClipboardSink: Send + Sync {
	fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// An export that has been handed to the worker thread.
#[derive(Debug)]
pub struct PendingExport {
	outcome: Receiver<Result<(), ClipboardError>>,
	chars: usize,
	finished: bool,
}

impl PendingExport {
	/// Number of characters being copied.
	pub fn chars(&self) -> usize {
		self.chars
	}

	/// Poll for the outcome without blocking.
	///
	/// Returns `Some` exactly once; later calls return `None`.
	pub fn try_outcome(&mut self) -> Option<Result<(), ClipboardError>> {
		if self.finished {
			return None;
		}
		let outcome = match self.outcome.try_recv() {
			Ok(outcome) => outcome,
			Err(TryRecvError::Empty) => return None,
			Err(TryRecvError::Disconnected) => Err(ClipboardError::WorkerLost),
		};
		self.finished = true;
		Some(outcome)
	}

	/// Block until the write completes.
	pub fn wait(self) -> Result<(), ClipboardError> {
		self.outcome.recv().unwrap_or(Err(ClipboardError::WorkerLost))
	}
}

/// Start copying `text` to the clipboard.
///
/// Empty text is refused up front with [`ClipboardError::EmptyText`] and the
/// sink is not touched.
pub fn export_to_clipboard<C>(sink: Arc<C>, text: &str) -> Result<PendingExport, ClipboardError>
where
	C: ClipboardSink + ?Sized + 'static,
{
	if text.is_empty() {
		return Err(ClipboardError::EmptyText);
	}

	let (tx, rx) = mpsc::channel();
	let owned = text.to_string();
	let chars = owned.chars().count();

	thread::Builder::new()
		.name("clipboard-export".into())
		.spawn(move || {
			let outcome = sink.write_text(&owned);
			match &outcome {
				Ok(()) => debug!(chars = owned.chars().count(), "copied master prompt"),
				Err(err) => warn!(error = %err, "clipboard export failed"),
			}
			let _ = tx.send(outcome);
		})
		.map_err(|err| ClipboardError::Unavailable(err.to_string()))?;

	Ok(PendingExport {
		outcome: rx,
		chars,
		finished: false,
	})
}

/// In-memory clipboard for headless environments and tests.
///
/// Records every successful write. When built with [`MemoryClipboard::failing`]
/// every write fails with the given error instead.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
	writes: Mutex<Vec<String>>,
	failure: Option<ClipboardError>,
}

impl MemoryClipboard {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn failing(error: ClipboardError) -> Self {
		Self {
			writes: Mutex::default(),
			failure: Some(error),
		}
	}

	/// Every text written so far, oldest first.
	pub fn writes(&self) -> Vec<String> {
		match self.writes.lock() {
			Ok(writes) => writes.clone(),
			Err(poisoned) => poisoned.into_inner().clone(),
		}
	}

	pub fn last(&self) -> Option<String> {
		self.writes().pop()
	}
}

impl ClipboardSink for MemoryClipboard {
	fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
		if let Some(err) = &self.failure {
			return Err(err.clone());
		}
		let mut writes = match self.writes.lock() {
			Ok(writes) => writes,
			Err(poisoned) => poisoned.into_inner(),
		};
		writes.push(text.to_string());
		Ok(())
	}
}
