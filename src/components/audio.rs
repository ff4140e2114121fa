//! Floating background-music toolbox.

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::context::PreferenceStore;
use crate::preferences::{DEFAULT_VOLUME, clamp_volume};

/// `HTMLMediaElement.readyState` at which the current frame is available.
pub const HAVE_CURRENT_DATA: u16 = 2;

/// Whether the element must be told to load before `play()`.
pub fn needs_load(ready_state: u16) -> bool {
	ready_state < HAVE_CURRENT_DATA
}

/// Media element events that change the playing flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaEvent {
	Play,
	Pause,
	Ended,
	Error,
}

/// Player state independent of the `<audio>` element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioState {
	pub playing: bool,
	pub muted: bool,
	pub controls_open: bool,
	volume: f64,
}

impl Default for AudioState {
	fn default() -> Self {
		Self::new(DEFAULT_VOLUME)
	}
}

impl AudioState {
	pub fn new(volume: f64) -> Self {
		Self {
			playing: false,
			muted: false,
			controls_open: false,
			volume: clamp_volume(volume),
		}
	}

	pub fn volume(&self) -> f64 {
		self.volume
	}

	/// Volume the element should actually play at.
	pub fn output_volume(&self) -> f64 {
		if self.muted { 0.0 } else { self.volume }
	}

	pub fn percent(&self) -> u32 {
		(self.volume * 100.0).round() as u32
	}

	/// Set the volume, clamped to `[0, 1]`. Raising it above zero unmutes.
	/// Returns the stored value.
	pub fn set_volume(&mut self, volume: f64) -> f64 {
		self.volume = clamp_volume(volume);
		if self.volume > 0.0 {
			self.muted = false;
		}
		self.volume
	}

	/// Flip mute; the stored volume is untouched.
	pub fn toggle_mute(&mut self) {
		self.muted = !self.muted;
	}

	pub fn toggle_controls(&mut self) {
		self.controls_open = !self.controls_open;
	}

	pub fn apply(&mut self, event: MediaEvent) {
		self.playing = matches!(event, MediaEvent::Play);
	}
}

/// Hidden looping `<audio>` element plus its floating control panel.
///
/// Playback only starts from the play button, never automatically. The
/// volume is persisted on every change.
#[component]
pub fn AudioPlayer(
	#[prop(into)] src: String,
	#[prop(default = DEFAULT_VOLUME)] volume: f64,
) -> impl IntoView {
	let store = expect_context::<PreferenceStore>();
	let state = RwSignal::new(AudioState::new(volume));
	let audio_ref = NodeRef::<leptos::html::Audio>::new();

	Effect::new(move |_| {
		let Some(audio) = audio_ref.get() else {
			return;
		};
		audio.set_loop(true);
		audio.set_volume(state.with(AudioState::output_volume));
	});

	let on_media = move |event: MediaEvent| {
		state.try_update(|s| s.apply(event));
	};

	let toggle_play = move |_: web_sys::MouseEvent| {
		let Some(audio) = audio_ref.get_untracked() else {
			return;
		};
		if state.with_untracked(|s| s.playing) {
			let _ = audio.pause();
			state.update(|s| s.apply(MediaEvent::Pause));
			return;
		}
		if needs_load(audio.ready_state()) {
			audio.load();
		}
		let promise: js_sys::Promise = match audio.play() {
			Ok(promise) => promise,
			Err(e) => {
				warn!("folio: playback failed to start: {:?}", e);
				return;
			}
		};
		spawn_local(async move {
			match JsFuture::from(promise).await {
				Ok(_) => {
					state.try_update(|s| s.playing = true);
				}
				Err(e) => {
					warn!("folio: playback was prevented: {:?}", e);
					state.try_update(|s| s.playing = false);
				}
			}
		});
	};

	let toggle_mute = move |_: web_sys::MouseEvent| state.update(AudioState::toggle_mute);
	let toggle_controls = move |_: web_sys::MouseEvent| state.update(AudioState::toggle_controls);

	let on_volume = move |ev: web_sys::Event| {
		let Ok(requested) = event_target_value(&ev).parse::<f64>() else {
			debug!("folio: ignoring non-numeric volume input");
			return;
		};
		if let Some(stored) = state.try_update(|s| s.set_volume(requested)) {
			store.save_volume(stored);
		}
	};

	view! {
		<audio
			node_ref=audio_ref
			src=src
			preload="none"
			on:play=move |_| on_media(MediaEvent::Play)
			on:pause=move |_| on_media(MediaEvent::Pause)
			on:ended=move |_| on_media(MediaEvent::Ended)
			on:error=move |_| {
				warn!("folio: audio element reported an error");
				on_media(MediaEvent::Error)
			}
		/>
		<div class="audio-toolbox">
			<button
				class="audio-toggle"
				class:pulsing=move || state.with(|s| s.playing)
				aria-label="Music controls"
				on:click=toggle_controls
			>
				"♪"
			</button>
			<Show when=move || state.with(|s| s.controls_open)>
				<div class="audio-panel">
					<div class="audio-buttons">
						<button class="audio-play" on:click=toggle_play>
							{move || if state.with(|s| s.playing) { "⏸" } else { "▶" }}
						</button>
						<button class="audio-mute" on:click=toggle_mute>
							{move || if state.with(|s| s.muted) { "🔇" } else { "🔊" }}
						</button>
						<span class="audio-status">
							{move || if state.with(|s| s.playing) { "Playing" } else { "Paused" }}
						</span>
					</div>
					<label class="audio-volume">
						{move || format!("Volume: {}%", state.with(AudioState::percent))}
						<input
							type="range"
							min="0"
							max="1"
							step="0.1"
							prop:value=move || state.with(|s| s.volume()).to_string()
							on:input=on_volume
						/>
					</label>
				</div>
			</Show>
		</div>
	}
}
