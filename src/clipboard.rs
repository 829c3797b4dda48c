//! Host clipboard access through `arboard`.

use std::sync::Mutex;

use arboard::Clipboard;
use prompt_partner_core::{ClipboardError, ClipboardSink};
use tracing::debug;

/// The system clipboard.
///
/// The `arboard` handle is opened on first use and kept for the life of the
/// value; on X11 and Wayland the copied text stays available only while a
/// handle exists.
#[derive(Default)]
pub struct SystemClipboard {
	handle: Mutex<Option<Clipboard>>,
}

impl SystemClipboard {
	pub fn new() -> Self {
		Self::default()
	}
}

impl ClipboardSink for SystemClipboard {
	fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
		let mut guard = self
			.handle
			.lock()
			.map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".into()))?;

		if guard.is_none() {
			let opened =
				Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
			debug!("opened system clipboard");
			*guard = Some(opened);
		}
		let Some(clipboard) = guard.as_mut() else {
			return Err(ClipboardError::Unavailable("clipboard handle missing".into()));
		};

		clipboard
			.set_text(text)
			.map_err(|err| ClipboardError::WriteFailed(err.to_string()))
	}
}
