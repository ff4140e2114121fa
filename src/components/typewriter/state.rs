//! Character-by-character reveal state.
//!
//! The state machine knows nothing about timers: the driver asks
//! [`Typewriter::next_delay`] how long to wait, then calls
//! [`Typewriter::reveal_next`] when that delay has elapsed.

use std::time::Duration;

/// Delays driving a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTiming {
	/// Wait before the first character.
	pub initial_delay: Duration,
	/// Wait between subsequent characters.
	pub per_character: Duration,
}

impl RevealTiming {
	pub const fn from_millis(initial_delay: u64, per_character: u64) -> Self {
		Self {
			initial_delay: Duration::from_millis(initial_delay),
			per_character: Duration::from_millis(per_character),
		}
	}
}

impl Default for RevealTiming {
	fn default() -> Self {
		Self::from_millis(0, 50)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
	/// Nothing shown yet.
	Idle,
	/// Part of the text is shown.
	Revealing,
	/// Full text shown; terminal.
	Complete,
}

/// Outcome of one reveal tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
	/// One more character is visible; more remain.
	Revealed,
	/// The last character became visible. Reported exactly once.
	Completed,
	/// Already complete; nothing changed.
	Idle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
	text: String,
	/// Number of characters (not bytes) currently shown.
	cursor: usize,
	displayed: String,
	complete: bool,
	timing: RevealTiming,
}

impl Typewriter {
	pub fn new(text: impl Into<String>, timing: RevealTiming) -> Self {
		Self {
			text: text.into(),
			cursor: 0,
			displayed: String::new(),
			complete: false,
			timing,
		}
	}

	pub fn displayed(&self) -> &str {
		&self.displayed
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn is_complete(&self) -> bool {
		self.complete
	}

	pub fn phase(&self) -> RevealPhase {
		if self.complete {
			RevealPhase::Complete
		} else if self.cursor == 0 {
			RevealPhase::Idle
		} else {
			RevealPhase::Revealing
		}
	}

	fn len(&self) -> usize {
		self.text.chars().count()
	}

	/// How long to wait before the next [`reveal_next`](Self::reveal_next), or `None` once complete.
	pub fn next_delay(&self) -> Option<Duration> {
		if self.complete {
			None
		} else if self.cursor == 0 {
			Some(self.timing.initial_delay)
		} else {
			Some(self.timing.per_character)
		}
	}

	/// Show one more character.
	pub fn reveal_next(&mut self) -> Step {
		if self.complete {
			return Step::Idle;
		}
		if let Some(ch) = self.text.chars().nth(self.cursor) {
			self.displayed.push(ch);
			self.cursor += 1;
		}
		if self.cursor >= self.len() {
			self.complete = true;
			Step::Completed
		} else {
			Step::Revealed
		}
	}

	/// Show the whole text at once. Returns `true` if this call completed the reveal.
	pub fn finish(&mut self) -> bool {
		self.displayed = self.text.clone();
		self.cursor = self.len();
		!std::mem::replace(&mut self.complete, true)
	}

	/// Swap the source text, e.g. after a language switch.
	///
	/// A completed reveal shows the new text immediately and stays complete.
	/// A reveal in progress keeps its cursor and continues through the new text.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text = text.into();
		if text == self.text {
			return;
		}
		self.text = text;
		if self.complete {
			self.displayed = self.text.clone();
			self.cursor = self.len();
		} else {
			self.cursor = self.cursor.min(self.len());
			self.displayed = self.text.chars().take(self.cursor).collect();
		}
	}
}
