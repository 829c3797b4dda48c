//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout and stderr while it runs, so interactive
//! sessions log to a file in the data directory. One-shot subcommands log to
//! stderr. Verbosity comes from `PROMPT_PARTNER_LOG` in `EnvFilter` syntax.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

pub const LOG_ENV: &str = "PROMPT_PARTNER_LOG";
pub const LOG_FILE_NAME: &str = "prompt-partner.log";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	/// Append to `prompt-partner.log` inside this directory.
	File(PathBuf),
}

/// Install the global subscriber. Calling it twice is harmless; the second
/// call keeps the first subscriber.
pub fn initialize(target: &LogTarget) -> Result<()> {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

	let installed = match target {
		LogTarget::Stderr => tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_writer(io::stderr)
			.with_target(false)
			.try_init(),
		LogTarget::File(dir) => {
			let writer = FileWriter::open(dir)?;
			tracing_subscriber::fmt()
				.with_env_filter(filter)
				.with_writer(writer)
				.with_ansi(false)
				.try_init()
		}
	};

	if installed.is_err() {
		tracing::debug!("tracing subscriber already installed");
	}
	Ok(())
}

/// Shared append-only handle to the log file.
#[derive(Clone)]
struct FileWriter {
	file: Arc<Mutex<File>>,
}

impl FileWriter {
	fn open(dir: &Path) -> Result<Self> {
		fs::create_dir_all(dir)
			.with_context(|| format!("failed to create log directory {}", dir.display()))?;
		let path = dir.join(LOG_FILE_NAME);
		let file = OpenOptions::new()
			.create(true)
			.append(true)
			.open(&path)
			.with_context(|| format!("failed to open log file {}", path.display()))?;
		Ok(Self {
			file: Arc::new(Mutex::new(file)),
		})
	}
}

impl io::Write for FileWriter {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let mut file = self
			.file
			.lock()
			.map_err(|_| io::Error::other("log file lock poisoned"))?;
		file.write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		let mut file = self
			.file
			.lock()
			.map_err(|_| io::Error::other("log file lock poisoned"))?;
		file.flush()
	}
}

impl<'a> MakeWriter<'a> for FileWriter {
	type Writer = FileWriter;

	fn make_writer(&'a self) -> Self::Writer {
		self.clone()
	}
}
