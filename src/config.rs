//! Site configuration embedded in the host page.
//!
//! The page may carry a `<script id="site-config" type="application/json">`
//! element. Every field is optional; anything missing keeps its default.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::viewport::DEFAULT_BREAKPOINT;

pub const CONFIG_ELEMENT_ID: &str = "site-config";
pub const DEFAULT_AUDIO_SRC: &str = "/audio/background-music.mp3";

/// Particle settings for the hero background.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
	pub density: usize,
	pub speed: f64,
}

impl Default for ParticleSettings {
	fn default() -> Self {
		Self {
			density: 60,
			speed: 0.3,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	pub particles: ParticleSettings,
	/// Background music URL.
	pub audio_src: String,
	/// Widths at or below this many CSS pixels count as a small viewport.
	pub small_viewport_breakpoint: f64,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			particles: ParticleSettings::default(),
			audio_src: DEFAULT_AUDIO_SRC.to_string(),
			small_viewport_breakpoint: DEFAULT_BREAKPOINT,
		}
	}
}

impl SiteConfig {
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		let mut config: SiteConfig = serde_json::from_str(json)?;
		if !config.small_viewport_breakpoint.is_finite() || config.small_viewport_breakpoint < 0.0 {
			config.small_viewport_breakpoint = DEFAULT_BREAKPOINT;
		}
		if !config.particles.speed.is_finite() {
			config.particles.speed = ParticleSettings::default().speed;
		}
		Ok(config)
	}

	/// Read the config element from the document, or defaults.
	pub fn load() -> Self {
		let Some(json) = config_text() else {
			return Self::default();
		};
		match Self::from_json(&json) {
			Ok(config) => {
				info!(
					"folio: site config loaded (density {}, breakpoint {})",
					config.particles.density, config.small_viewport_breakpoint
				);
				config
			}
			Err(e) => {
				warn!("folio: failed to parse site config: {}", e);
				Self::default()
			}
		}
	}
}

fn config_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}
