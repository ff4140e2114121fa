//! The landing section: particle backdrop plus three chained typewriter lines.

use leptos::prelude::*;

use super::particle_field::ParticleBackground;
use super::typewriter::TypewriterText;
use crate::config::SiteConfig;
use crate::context::{HeroAnimation, LanguageSignal, ThemeSignal};

/// Which hero line is currently typing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
	#[default]
	Title,
	Subtitle,
	Description,
	Done,
}

impl Stage {
	fn next(self) -> Self {
		match self {
			Stage::Title => Stage::Subtitle,
			Stage::Subtitle => Stage::Description,
			Stage::Description | Stage::Done => Stage::Done,
		}
	}

	/// Handle `line` finishing. Only the line that is currently typing moves the sequence on.
	pub fn advance(self, line: Stage) -> Self {
		if line == self { self.next() } else { self }
	}

	/// Whether `line` has started (it stays visible once it has).
	pub fn shows(self, line: Stage) -> bool {
		line <= self
	}

	pub fn is_done(self) -> bool {
		self == Stage::Done
	}
}

#[component]
pub fn HeroSection() -> impl IntoView {
	let language = expect_context::<LanguageSignal>();
	let theme = expect_context::<ThemeSignal>().0;
	let hero = expect_context::<HeroAnimation>();
	let particles = expect_context::<SiteConfig>().particles;

	let stage = RwSignal::new(Stage::default());
	let finished = move |line: Stage| {
		Callback::new(move |()| {
			let Some(now) = stage.try_update(|s| {
				*s = s.advance(line);
				*s
			}) else {
				return;
			};
			if now.is_done() {
				hero.mark_complete();
			}
		})
	};
	let color = Signal::derive(move || theme.get().particle_color());

	view! {
		<section class="hero">
			<ParticleBackground density=particles.density speed=particles.speed color=color />
			<div class="hero-card">
				<h1 class="hero-title">
					<TypewriterText
						text=language.text("heroTitle")
						delay=500
						speed=100
						on_complete=finished(Stage::Title)
					/>
				</h1>
				<Show when=move || stage.get().shows(Stage::Subtitle)>
					<h2 class="hero-subtitle">
						<TypewriterText
							text=language.text("heroSubtitle")
							delay=200
							speed=80
							on_complete=finished(Stage::Subtitle)
						/>
					</h2>
				</Show>
				<Show when=move || stage.get().shows(Stage::Description)>
					<p class="hero-description">
						<TypewriterText
							text=language.text("heroDescription")
							delay=200
							speed=30
							on_complete=finished(Stage::Description)
						/>
					</p>
				</Show>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sequence_runs_in_order() {
		let mut stage = Stage::default();
		stage = stage.advance(Stage::Title);
		assert_eq!(stage, Stage::Subtitle);
		stage = stage.advance(Stage::Subtitle);
		assert_eq!(stage, Stage::Description);
		stage = stage.advance(Stage::Description);
		assert!(stage.is_done());
		assert_eq!(stage.advance(Stage::Description), Stage::Done);
	}

	#[test]
	fn test_stale_completion_is_ignored() {
		let stage = Stage::Subtitle;
		assert_eq!(stage.advance(Stage::Title), Stage::Subtitle);
		assert_eq!(stage.advance(Stage::Description), Stage::Subtitle);
	}

	#[test]
	fn test_lines_stay_visible() {
		assert!(Stage::Title.shows(Stage::Title));
		assert!(!Stage::Title.shows(Stage::Subtitle));
		assert!(Stage::Done.shows(Stage::Description));
		assert!(Stage::Description.shows(Stage::Subtitle));
	}
}
