//! Site chrome: floating header, footer and the audio toolbox.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::audio::AudioPlayer;
use crate::context::{HeroAnimation, LanguageSignal, ThemeSignal};
use crate::i18n::Language;
use crate::theme::Theme;

/// Header links as `(path, translation key)`.
pub const NAV_ITEMS: [(&str, &str); 3] = [
	("/", "navHome"),
	("/about", "navAbout"),
	("/contact", "navContact"),
];

/// The header waits for the hero to finish typing, but only on the home page.
pub fn header_visible(path: &str, hero_complete: bool) -> bool {
	path != "/" || hero_complete
}

#[component]
fn ThemeToggle() -> impl IntoView {
	let theme = expect_context::<ThemeSignal>().0;
	let label = move || match theme.get() {
		Theme::Dark => "Switch to light mode",
		Theme::Light => "Switch to dark mode",
	};

	view! {
		<button class="theme-toggle" aria-label=label on:click=move |_| theme.update(|t| *t = t.toggle())>
			{move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
		</button>
	}
}

#[component]
fn LanguageSelector() -> impl IntoView {
	let language = expect_context::<LanguageSignal>().0;
	let open = RwSignal::new(false);

	let options = move || {
		Language::ALL
			.into_iter()
			.map(|lang| {
				view! {
					<li>
						<button
							class="language-option"
							class:selected=move || language.get() == lang
							on:click=move |_| {
								language.set(lang);
								open.set(false);
							}
						>
							<span>{lang.flag()}</span>
							" "
							<span>{lang.name()}</span>
						</button>
					</li>
				}
			})
			.collect_view()
	};

	view! {
		<div class="language-selector">
			<button class="language-current" on:click=move |_| open.update(|o| *o = !*o)>
				{move || language.get().flag()}
				" "
				{move || language.get().code().to_uppercase()}
			</button>
			<Show when=move || open.get()>
				<ul class="language-popover">{options}</ul>
			</Show>
		</div>
	}
}

#[component]
fn Header() -> impl IntoView {
	let language = expect_context::<LanguageSignal>();
	let hero = expect_context::<HeroAnimation>();
	let location = use_location();
	let menu_open = RwSignal::new(false);

	let visible = move || header_visible(&location.pathname.get(), hero.complete());
	let links = move |class: &'static str| {
		NAV_ITEMS
			.into_iter()
			.map(|(path, key)| {
				view! {
					<A href=path attr:class=class on:click=move |_| menu_open.set(false)>
						{move || language.t(key)}
					</A>
				}
			})
			.collect_view()
	};

	view! {
		<nav class="site-header" class:hidden=move || !visible()>
			<div class="site-header-bar">
				<A href="/" attr:class="logo" attr:aria-label="Go to Home Page">
					"ARD"
				</A>
				<div class="nav-links">{links("nav-link")}</div>
				<div class="nav-controls">
					<ThemeToggle />
					<LanguageSelector />
					<button
						class="menu-toggle"
						aria-label="Toggle menu"
						on:click=move |_| menu_open.update(|o| *o = !*o)
					>
						{move || if menu_open.get() { "✕" } else { "☰" }}
					</button>
				</div>
			</div>
			<Show when=move || menu_open.get()>
				<div class="mobile-menu">{links("mobile-link")}</div>
			</Show>
		</nav>
	}
}

#[component]
fn Footer() -> impl IntoView {
	let language = expect_context::<LanguageSignal>();

	view! {
		<footer class="site-footer">
			<p>{move || language.t("footerCopyright")}</p>
			<a href="https://saweria.co/ardanny" target="_blank" rel="noopener noreferrer">
				{move || language.t("footerSupport")}
			</a>
		</footer>
	}
}

/// Page frame shared by every route.
#[component]
pub fn Layout(
	/// Background music URL.
	#[prop(into)]
	audio_src: String,
	/// Volume restored from preferences.
	volume: f64,
	children: Children,
) -> impl IntoView {
	view! {
		<div class="site">
			<Header />
			<main>{children()}</main>
			<Footer />
			<AudioPlayer src=audio_src volume=volume />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_header_hidden_on_home_until_hero_completes() {
		assert!(!header_visible("/", false));
		assert!(header_visible("/", true));
		assert!(header_visible("/about", false));
		assert!(header_visible("/contact", false));
	}

	#[test]
	fn test_nav_keys_translate() {
		for (_, key) in NAV_ITEMS {
			assert_ne!(Language::English.translate(key), key);
		}
	}
}
