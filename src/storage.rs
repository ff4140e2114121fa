//! Per-browser key-value persistence.
//!
//! Preferences are read once at startup and written back whenever they
//! change. The browser's `localStorage` is the production backend; an
//! in-memory map stands in when storage is unavailable (private browsing,
//! sandboxed iframes) and in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use log::debug;

/// Errors raised by a [`KeyValueStore`] write.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
	/// The backend rejected the write (quota exceeded, storage disabled).
	WriteRejected { key: String, reason: String },
	/// The backend rejected the removal of a key.
	RemoveRejected { key: String, reason: String },
}

impl fmt::Display for StorageError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			StorageError::WriteRejected { key, reason } => {
				write!(f, "failed to store '{}': {}", key, reason)
			}
			StorageError::RemoveRejected { key, reason } => {
				write!(f, "failed to remove '{}': {}", key, reason)
			}
		}
	}
}

impl std::error::Error for StorageError {}

/// Minimal string key-value store.
pub trait KeyValueStore {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
	fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
pub struct BrowserStorage {
	storage: web_sys::Storage,
}

impl BrowserStorage {
	/// Acquire `localStorage`, or `None` when the browser denies access.
	pub fn open() -> Option<Self> {
		let storage = web_sys::window()?.local_storage().ok()??;
		Some(Self { storage })
	}
}

fn js_reason(err: wasm_bindgen::JsValue) -> String {
	err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl KeyValueStore for BrowserStorage {
	fn get(&self, key: &str) -> Option<String> {
		self.storage.get_item(key).ok().flatten()
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.storage
			.set_item(key, value)
			.map_err(|e| StorageError::WriteRejected {
				key: key.to_string(),
				reason: js_reason(e),
			})
	}

	fn remove(&self, key: &str) -> Result<(), StorageError> {
		self.storage
			.remove_item(key)
			.map_err(|e| StorageError::RemoveRejected {
				key: key.to_string(),
				reason: js_reason(e),
			})
	}
}

/// Volatile store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.borrow().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.entries
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<(), StorageError> {
		self.entries.borrow_mut().remove(key);
		Ok(())
	}
}

/// Open `localStorage`, falling back to a [`MemoryStore`].
pub fn open_default() -> Box<dyn KeyValueStore> {
	match BrowserStorage::open() {
		Some(storage) => Box::new(storage),
		None => {
			debug!("folio: localStorage unavailable, preferences will not persist");
			Box::new(MemoryStore::new())
		}
	}
}
