//! Route targets.

use leptos::prelude::*;
use leptos_router::components::A;

use super::hero::HeroSection;
use super::social_grid::SocialGrid;
use crate::context::LanguageSignal;

pub use super::maintenance::{AboutPage, ContactPage};

#[component]
pub fn HomePage() -> impl IntoView {
	view! {
		<div class="home">
			<HeroSection />
			<SocialGrid />
		</div>
	}
}

/// Shown for any path without a route.
#[component]
pub fn NotFound() -> impl IntoView {
	let language = expect_context::<LanguageSignal>();

	view! {
		<div class="not-found">
			<h1>"404"</h1>
			<A href="/">{move || language.t("navHome")}</A>
		</div>
	}
}
