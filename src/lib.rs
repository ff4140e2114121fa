//! folio: a single-page personal site rendered client-side with Leptos.
//!
//! The landing page pairs an animated particle canvas with a typewriter
//! hero sequence. Language, theme and music volume persist in
//! `localStorage` between visits.

use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use log::{Level, info};

pub mod components;
pub mod config;
pub mod context;
pub mod i18n;
pub mod preferences;
pub mod storage;
pub mod theme;
pub mod viewport;

use components::layout::Layout;
use components::pages::{AboutPage, ContactPage, HomePage, NotFound};
use config::SiteConfig;
use context::{HeroAnimation, LanguageSignal, PreferenceStore, ThemeSignal, ViewportSignal};
use preferences::Preferences;
use viewport::Viewport;

pub use components::particle_field::ParticleBackground;
pub use components::typewriter::TypewriterText;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio: logging initialized");
}

/// Root component: loads configuration and preferences, provides the shared
/// context, and mounts the router.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = SiteConfig::load();
	let backend = storage::open_default();
	let prefs = Preferences::load(backend.as_ref());
	info!(
		"folio: preferences loaded (language {}, theme {}, volume {})",
		prefs.language.code(),
		prefs.theme.as_str(),
		prefs.volume
	);
	let store = PreferenceStore::new(backend);

	let breakpoint = config.small_viewport_breakpoint;
	let audio_src = config.audio_src.clone();
	let viewport = RwSignal::new(
		Viewport::from_window(breakpoint)
			.unwrap_or_else(|| Viewport::with_breakpoint(1280.0, 720.0, breakpoint)),
	);
	let language = RwSignal::new(prefs.language);
	let theme = RwSignal::new(prefs.theme);

	provide_context(ViewportSignal(viewport));
	provide_context(HeroAnimation(RwSignal::new(false)));
	provide_context(LanguageSignal(language));
	provide_context(ThemeSignal(theme));
	provide_context(store);
	provide_context(config);

	// The only resize listener; everything else reads the viewport signal.
	let resize = window_event_listener(leptos::ev::resize, move |_| {
		if let Some(vp) = Viewport::from_window(breakpoint) {
			viewport.set(vp);
		}
	});
	on_cleanup(move || resize.remove());

	Effect::watch(move || theme.get(), move |theme, _, _| store.save_theme(*theme), false);
	Effect::watch(
		move || language.get(),
		move |language, _, _| store.save_language(*language),
		false,
	);

	view! {
		<Html
			attr:lang=move || language.get().code()
			attr:dir="ltr"
			attr:data-theme=move || theme.get().as_str()
			attr:class=move || theme.get().as_str()
		/>
		<Title text="Danny | Content Creator & Developer" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Layout audio_src=audio_src.clone() volume=prefs.volume>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=HomePage />
					<Route path=path!("/about") view=AboutPage />
					<Route path=path!("/contact") view=ContactPage />
				</Routes>
			</Layout>
		</Router>
	}
}
