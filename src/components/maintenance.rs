//! Placeholder pages that count down and send the visitor home.

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use log::{info, warn};

use crate::context::LanguageSignal;

pub const REDIRECT_SECONDS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
	/// Seconds still left.
	Running(u32),
	/// Reached zero on this tick.
	Expired,
	/// Already at zero.
	Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
	remaining: u32,
}

impl Countdown {
	pub fn new(seconds: u32) -> Self {
		Self { remaining: seconds }
	}

	pub fn remaining(&self) -> u32 {
		self.remaining
	}

	/// One second passes. Reports [`Tick::Expired`] exactly once.
	pub fn tick(&mut self) -> Tick {
		match self.remaining {
			0 => Tick::Idle,
			1 => {
				self.remaining = 0;
				Tick::Expired
			}
			n => {
				self.remaining = n - 1;
				Tick::Running(self.remaining)
			}
		}
	}
}

/// "Under maintenance" notice with a countdown back to `/`.
#[component]
pub fn MaintenancePage(title_key: &'static str) -> impl IntoView {
	let language = expect_context::<LanguageSignal>();
	let navigate = use_navigate();
	let countdown = RwSignal::new(Countdown::new(REDIRECT_SECONDS));
	let interval = StoredValue::new(None::<IntervalHandle>);

	let started = set_interval_with_handle(
		move || {
			let Some(tick) = countdown.try_update(Countdown::tick) else {
				return;
			};
			if tick == Tick::Expired {
				interval.try_update_value(|handle| {
					if let Some(handle) = handle.take() {
						handle.clear();
					}
				});
				info!("folio: maintenance countdown finished, returning home");
				navigate("/", Default::default());
			}
		},
		Duration::from_secs(1),
	);
	match started {
		Ok(handle) => interval.set_value(Some(handle)),
		Err(e) => warn!("folio: could not start maintenance countdown: {:?}", e),
	}

	on_cleanup(move || {
		interval.try_update_value(|handle| {
			if let Some(handle) = handle.take() {
				handle.clear();
			}
		});
	});

	view! {
		<div class="maintenance">
			<div class="maintenance-card">
				<div class="maintenance-icon" aria-hidden="true">"⚙"</div>
				<h1>{move || language.t(title_key)}</h1>
				<h2>{move || language.t("maintenanceTitle")}</h2>
				<p class="maintenance-notice">{move || language.t("maintenanceNotice")}</p>
				<div class="maintenance-countdown">
					<p>{move || language.t("maintenanceRedirect")}</p>
					<span class="maintenance-seconds">{move || countdown.with(Countdown::remaining)}</span>
					<span>" "{move || language.t("maintenanceSeconds")}</span>
				</div>
				<p class="maintenance-footer">{move || language.t("maintenanceFooter")}</p>
			</div>
		</div>
	}
}

#[component]
pub fn AboutPage() -> impl IntoView {
	view! { <MaintenancePage title_key="aboutTitle" /> }
}

#[component]
pub fn ContactPage() -> impl IntoView {
	view! { <MaintenancePage title_key="contactTitle" /> }
}
