//! Durable key-value port used for presentation state.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KvError {
	#[error("key-value storage is unavailable: {0}")]
	Unavailable(String),
	#[error("failed to read key '{key}': {reason}")]
	Read { key: String, reason: String },
	#[error("failed to write key '{key}': {reason}")]
	Write { key: String, reason: String },
}

/// String-keyed storage that outlives a session.
///
/// Implementations are expected to have finished writing when [`set`]
/// returns.
///
/// [`set`]: KeyValueStore::set
pub trait KeyValueStore {
	fn get(&self, key: &str) -> Result<Option<String>, KvError>;
	fn set(&mut self, key: &str, value: String) -> Result<(), KvError>;
}

/// Process-local store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
	entries: HashMap<String, String>,
}

impl MemoryKv {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.entries.insert(key.into(), value.into());
		self
	}
}

impl KeyValueStore for MemoryKv {
	fn get(&self, key: &str) -> Result<Option<String>, KvError> {
		Ok(self.entries.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: String) -> Result<(), KvError> {
		self.entries.insert(key.to_string(), value);
		Ok(())
	}
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
	fn get(&self, key: &str) -> Result<Option<String>, KvError> {
		(**self).get(key)
	}

	fn set(&mut self, key: &str, value: String) -> Result<(), KvError> {
		(**self).set(key, value)
	}
}
