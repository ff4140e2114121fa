//! Reactive state shared through Leptos context.
//!
//! `App` provides every value here exactly once; components fetch them with
//! `expect_context`. All wrappers are `Copy` handles into the reactive arena.

use leptos::prelude::*;
use log::warn;

use crate::i18n::Language;
use crate::preferences;
use crate::storage::KeyValueStore;
use crate::theme::Theme;
use crate::viewport::Viewport;

/// Current window size, kept up to date by a single resize listener.
#[derive(Clone, Copy)]
pub struct ViewportSignal(pub RwSignal<Viewport>);

/// Set once the hero's last line has finished typing.
#[derive(Clone, Copy)]
pub struct HeroAnimation(pub RwSignal<bool>);

impl HeroAnimation {
	pub fn complete(&self) -> bool {
		self.0.get()
	}

	pub fn mark_complete(&self) {
		if !self.0.get_untracked() {
			self.0.set(true);
		}
	}
}

#[derive(Clone, Copy)]
pub struct LanguageSignal(pub RwSignal<Language>);

impl LanguageSignal {
	/// Translate `key` in the current language. Tracks the language signal.
	pub fn t(&self, key: &'static str) -> String {
		self.0.get().translate(key)
	}

	/// A signal of `key`'s translation that follows language switches.
	pub fn text(self, key: &'static str) -> Signal<String> {
		Signal::derive(move || self.t(key))
	}
}

#[derive(Clone, Copy)]
pub struct ThemeSignal(pub RwSignal<Theme>);

/// The preference backend, `localStorage` or its in-memory fallback.
#[derive(Clone, Copy)]
pub struct PreferenceStore(pub StoredValue<Box<dyn KeyValueStore>, LocalStorage>);

impl PreferenceStore {
	pub fn new(store: Box<dyn KeyValueStore>) -> Self {
		Self(StoredValue::new_local(store))
	}

	/// Persist the volume, logging instead of failing.
	pub fn save_volume(&self, volume: f64) {
		self.0.with_value(|store| {
			if let Err(e) = preferences::save_volume(store.as_ref(), volume) {
				warn!("folio: {}", e);
			}
		});
	}

	pub fn save_theme(&self, theme: Theme) {
		self.0.with_value(|store| {
			if let Err(e) = preferences::save_theme(store.as_ref(), theme) {
				warn!("folio: {}", e);
			}
		});
	}

	pub fn save_language(&self, language: Language) {
		self.0.with_value(|store| {
			if let Err(e) = preferences::save_language(store.as_ref(), language) {
				warn!("folio: {}", e);
			}
		});
	}
}
