//! Browser timers wired to a [`RevealDriver`].

use std::time::Duration;

use leptos::prelude::*;
use log::warn;

use super::driver::{Action, RevealDriver};
use super::state::{RevealTiming, Typewriter};
use crate::context::ViewportSignal;

type PendingTimer = StoredValue<Option<TimeoutHandle>>;

fn cancel_pending(pending: PendingTimer) {
	pending.try_update_value(|handle| {
		if let Some(handle) = handle.take() {
			handle.clear();
		}
	});
}

fn arm(
	driver: RwSignal<RevealDriver>,
	pending: PendingTimer,
	on_complete: Option<Callback<()>>,
	action: Action,
) {
	let scheduled = match action {
		Action::Idle => return,
		Action::Tick(delay) => set_timeout_with_handle(
			move || {
				pending.try_update_value(|handle| *handle = None);
				// `None` means the component is gone.
				let Some(next) = driver.try_update(RevealDriver::on_tick) else {
					return;
				};
				arm(driver, pending, on_complete, next);
			},
			delay,
		),
		// Reported on a later turn, after the final character is in the DOM.
		Action::Defer => set_timeout_with_handle(
			move || {
				pending.try_update_value(|handle| *handle = None);
				if driver.try_update(RevealDriver::on_deferred) == Some(true) {
					if let Some(on_complete) = on_complete {
						on_complete.run(());
					}
				}
			},
			Duration::ZERO,
		),
	};
	match scheduled {
		Ok(handle) => {
			pending.try_update_value(|slot| *slot = Some(handle));
		}
		Err(err) => warn!("folio: could not schedule typewriter timer: {err:?}"),
	}
}

/// Reveals `text` one character at a time.
///
/// `delay` is the wait before the first character and `speed` the wait
/// between characters, both in milliseconds. `on_complete` runs once, after
/// the full text is shown. On small viewports, or with `skip_animation`, the
/// text appears at once and completion is still reported.
#[component]
pub fn TypewriterText(
	#[prop(into)] text: Signal<String>,
	#[prop(default = 0)] delay: u64,
	#[prop(default = 50)] speed: u64,
	#[prop(optional)] on_complete: Option<Callback<()>>,
	#[prop(default = false)] skip_animation: bool,
	#[prop(optional, into)] class: String,
) -> impl IntoView {
	let viewport = expect_context::<ViewportSignal>().0;
	let driver = RwSignal::new(RevealDriver::new(Typewriter::new(
		text.get_untracked(),
		RevealTiming::from_millis(delay, speed),
	)));
	let pending: PendingTimer = StoredValue::new(None);

	let skip = skip_animation || viewport.get_untracked().class().skips_typing();
	if let Some(first) = driver.try_update(|d| d.mount(skip)) {
		arm(driver, pending, on_complete, first);
	}

	Effect::watch(
		move || text.get(),
		move |new_text, _, _| {
			driver.try_update(|d| d.set_text(new_text.as_str()));
		},
		false,
	);

	on_cleanup(move || {
		driver.try_update(RevealDriver::cancel);
		cancel_pending(pending);
	});

	view! {
		<span class=format!("typewriter {class}")>
			<span>{move || driver.with(|d| d.typewriter().displayed().to_string())}</span>
			<Show when=move || !driver.with(|d| d.typewriter().is_complete())>
				<span class="typewriter-cursor" aria-hidden="true">"|"</span>
			</Show>
		</span>
	}
}
