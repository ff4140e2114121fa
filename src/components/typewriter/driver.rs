//! Scheduling decisions for a mounted typewriter.
//!
//! [`RevealDriver`] wraps a [`Typewriter`] and tells the component which
//! timer to arm next. Completion is always reported from a separate,
//! deferred turn, and nothing is scheduled once the driver is cancelled.

use std::time::Duration;

use super::state::{Step, Typewriter};

/// What the caller should schedule next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
	/// Call [`RevealDriver::on_tick`] after this delay.
	Tick(Duration),
	/// Call [`RevealDriver::on_deferred`] on a later turn, with no delay.
	Defer,
	/// Nothing left to schedule.
	Idle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealDriver {
	typewriter: Typewriter,
	notified: bool,
	cancelled: bool,
}

impl RevealDriver {
	pub fn new(typewriter: Typewriter) -> Self {
		Self {
			typewriter,
			notified: false,
			cancelled: false,
		}
	}

	pub fn typewriter(&self) -> &Typewriter {
		&self.typewriter
	}

	pub fn set_text(&mut self, text: impl Into<String>) {
		self.typewriter.set_text(text);
	}

	/// First action after mounting. With `skip`, the whole text is shown
	/// before this returns.
	pub fn mount(&mut self, skip: bool) -> Action {
		if self.cancelled {
			return Action::Idle;
		}
		if skip {
			return if self.typewriter.finish() { Action::Defer } else { Action::Idle };
		}
		self.next_tick()
	}

	fn next_tick(&self) -> Action {
		self.typewriter.next_delay().map_or(Action::Idle, Action::Tick)
	}

	/// A tick timer fired.
	pub fn on_tick(&mut self) -> Action {
		if self.cancelled {
			return Action::Idle;
		}
		match self.typewriter.reveal_next() {
			Step::Revealed => self.next_tick(),
			Step::Completed => Action::Defer,
			Step::Idle => Action::Idle,
		}
	}

	/// The deferred turn arrived. Returns `true` when completion should be reported.
	pub fn on_deferred(&mut self) -> bool {
		if self.cancelled || self.notified || !self.typewriter.is_complete() {
			return false;
		}
		self.notified = true;
		true
	}

	/// Teardown. Every later callback becomes a no-op.
	pub fn cancel(&mut self) {
		self.cancelled = true;
	}

	pub fn is_cancelled(&self) -> bool {
		self.cancelled
	}
}

#[cfg(test)]
mod tests {
	use std::collections::VecDeque;

	use super::*;
	use crate::components::typewriter::state::RevealTiming;

	#[derive(Debug, PartialEq)]
	enum Timer {
		Tick,
		Deferred,
	}

	/// Single-threaded event loop on a virtual clock.
	#[derive(Default)]
	struct EventLoop {
		now: u64,
		queue: VecDeque<(u64, Timer)>,
		completions: Vec<u64>,
	}

	impl EventLoop {
		fn arm(&mut self, action: Action) {
			match action {
				Action::Tick(delay) => {
					let due = self.now + delay.as_millis() as u64;
					self.queue.push_back((due, Timer::Tick));
				}
				Action::Defer => self.queue.push_back((self.now, Timer::Deferred)),
				Action::Idle => {}
			}
		}

		/// Fire the next timer. Returns `false` when the queue is empty.
		fn turn(&mut self, driver: &mut RevealDriver) -> bool {
			let Some((due, timer)) = self.queue.pop_front() else {
				return false;
			};
			self.now = due;
			match timer {
				Timer::Tick => {
					let next = driver.on_tick();
					self.arm(next);
				}
				Timer::Deferred => {
					if driver.on_deferred() {
						self.completions.push(self.now);
					}
				}
			}
			true
		}
	}

	fn driver(text: &str, initial: u64, per_char: u64) -> RevealDriver {
		RevealDriver::new(Typewriter::new(text, RevealTiming::from_millis(initial, per_char)))
	}

	#[test]
	fn test_skip_shows_text_synchronously_and_defers_completion() {
		let mut driver = driver("Halo", 500, 100);
		let mut ev = EventLoop::default();

		let first = driver.mount(true);
		assert_eq!(driver.typewriter().displayed(), "Halo");
		assert_eq!(first, Action::Defer);
		assert!(ev.completions.is_empty());

		ev.arm(first);
		assert!(ev.turn(&mut driver));
		assert_eq!(ev.completions, [0]);
		assert!(!ev.turn(&mut driver));
		assert!(!driver.on_deferred());
	}

	#[test]
	fn test_completion_reported_once_after_last_character() {
		let mut driver = driver("Hi", 500, 100);
		let mut ev = EventLoop::default();
		ev.arm(driver.mount(false));

		while ev.turn(&mut driver) {}
		assert_eq!(driver.typewriter().displayed(), "Hi");
		assert_eq!(ev.completions, [600]);
		assert_eq!(driver.on_tick(), Action::Idle);
		assert!(!driver.on_deferred());
	}

	#[test]
	fn test_nothing_runs_after_cancel() {
		let mut driver = driver("Hello", 0, 50);
		let mut ev = EventLoop::default();
		ev.arm(driver.mount(false));
		ev.turn(&mut driver);
		ev.turn(&mut driver);
		assert_eq!(driver.typewriter().displayed(), "He");

		driver.cancel();
		// A timer that was already queued still fires, but must not advance.
		while ev.turn(&mut driver) {}
		assert_eq!(driver.typewriter().displayed(), "He");
		assert!(ev.completions.is_empty());
		assert_eq!(driver.mount(false), Action::Idle);
	}

	#[test]
	fn test_cancel_between_completion_and_deferred_turn() {
		let mut driver = driver("a", 0, 10);
		assert_eq!(driver.mount(false), Action::Tick(Duration::ZERO));
		assert_eq!(driver.on_tick(), Action::Defer);
		driver.cancel();
		assert!(!driver.on_deferred());
	}

	#[test]
	fn test_deferred_turn_before_completion_is_ignored() {
		let mut driver = driver("abc", 0, 10);
		driver.mount(false);
		driver.on_tick();
		assert!(!driver.on_deferred());
	}

	#[test]
	fn test_skip_on_already_complete_text_reports_nothing() {
		let mut driver = driver("x", 0, 10);
		driver.mount(true);
		assert!(driver.on_deferred());
		assert_eq!(driver.mount(true), Action::Idle);
	}
}
