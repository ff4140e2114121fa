//! User preferences persisted across visits: language, theme and volume.
//!
//! Loaded once at startup from a [`KeyValueStore`]; each setter writes the
//! new value straight back. Unreadable stored values fall back to defaults.

use log::warn;

use crate::i18n::{Language, LanguageRecord};
use crate::storage::{KeyValueStore, StorageError};
use crate::theme::Theme;

pub const LANGUAGE_KEY: &str = "selectedLanguage";
pub const THEME_KEY: &str = "theme";
pub const VOLUME_KEY: &str = "audioVolume";

pub const DEFAULT_VOLUME: f64 = 0.5;

/// Snapshot of every persisted preference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preferences {
	pub language: Language,
	pub theme: Theme,
	pub volume: f64,
}

impl Default for Preferences {
	fn default() -> Self {
		Self {
			language: Language::default(),
			theme: Theme::default(),
			volume: DEFAULT_VOLUME,
		}
	}
}

impl Preferences {
	pub fn load(store: &dyn KeyValueStore) -> Self {
		Self {
			language: load_language(store),
			theme: load_theme(store),
			volume: load_volume(store),
		}
	}
}

/// Stored language, or English. A record that fails to parse is removed.
pub fn load_language(store: &dyn KeyValueStore) -> Language {
	let Some(raw) = store.get(LANGUAGE_KEY) else {
		return Language::default();
	};
	match serde_json::from_str::<LanguageRecord>(&raw) {
		Ok(record) => Language::from_code(&record.code).unwrap_or_default(),
		Err(e) => {
			warn!("folio: discarding unreadable language preference: {}", e);
			if let Err(e) = store.remove(LANGUAGE_KEY) {
				warn!("folio: {}", e);
			}
			Language::default()
		}
	}
}

pub fn save_language(store: &dyn KeyValueStore, language: Language) -> Result<(), StorageError> {
	// Serializing a struct of three strings cannot fail.
	let json = serde_json::to_string(&language.to_record()).unwrap_or_default();
	store.set(LANGUAGE_KEY, &json)
}

pub fn load_theme(store: &dyn KeyValueStore) -> Theme {
	store
		.get(THEME_KEY)
		.and_then(|raw| raw.parse().ok())
		.unwrap_or_default()
}

pub fn save_theme(store: &dyn KeyValueStore, theme: Theme) -> Result<(), StorageError> {
	store.set(THEME_KEY, theme.as_str())
}

pub fn load_volume(store: &dyn KeyValueStore) -> f64 {
	store
		.get(VOLUME_KEY)
		.and_then(|raw| raw.trim().parse::<f64>().ok())
		.filter(|v| v.is_finite())
		.map(clamp_volume)
		.unwrap_or(DEFAULT_VOLUME)
}

pub fn save_volume(store: &dyn KeyValueStore, volume: f64) -> Result<(), StorageError> {
	store.set(VOLUME_KEY, &clamp_volume(volume).to_string())
}

pub fn clamp_volume(volume: f64) -> f64 {
	if volume.is_nan() {
		return 0.0;
	}
	volume.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::MemoryStore;

	#[test]
	fn test_defaults_when_store_is_empty() {
		let store = MemoryStore::new();
		assert_eq!(Preferences::load(&store), Preferences::default());
	}

	#[test]
	fn test_language_roundtrip() {
		let store = MemoryStore::new();
		save_language(&store, Language::Indonesian).unwrap();
		assert_eq!(load_language(&store), Language::Indonesian);
	}

	#[test]
	fn test_language_accepts_record_with_only_code() {
		let store = MemoryStore::new();
		store.set(LANGUAGE_KEY, r#"{"code":"id"}"#).unwrap();
		assert_eq!(load_language(&store), Language::Indonesian);
	}

	#[test]
	fn test_unknown_language_code_falls_back() {
		let store = MemoryStore::new();
		store.set(LANGUAGE_KEY, r#"{"code":"de","name":"Deutsch"}"#).unwrap();
		assert_eq!(load_language(&store), Language::English);
		assert!(store.get(LANGUAGE_KEY).is_some());
	}

	#[test]
	fn test_corrupt_language_is_removed() {
		let store = MemoryStore::new();
		store.set(LANGUAGE_KEY, "not json").unwrap();
		assert_eq!(load_language(&store), Language::English);
		assert_eq!(store.get(LANGUAGE_KEY), None);
	}

	#[test]
	fn test_volume_is_clamped_and_parsed() {
		let store = MemoryStore::new();
		store.set(VOLUME_KEY, "1.7").unwrap();
		assert_eq!(load_volume(&store), 1.0);
		store.set(VOLUME_KEY, "loud").unwrap();
		assert_eq!(load_volume(&store), DEFAULT_VOLUME);
		save_volume(&store, 0.25).unwrap();
		assert_eq!(store.get(VOLUME_KEY).as_deref(), Some("0.25"));
		assert_eq!(load_volume(&store), 0.25);
	}

	#[test]
	fn test_theme_roundtrip() {
		let store = MemoryStore::new();
		store.set(THEME_KEY, "purple").unwrap();
		assert_eq!(load_theme(&store), Theme::Dark);
		save_theme(&store, Theme::Light).unwrap();
		assert_eq!(load_theme(&store), Theme::Light);
	}
}
