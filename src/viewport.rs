//! Viewport dimensions and the coarse device classification derived from them.
//!
//! Every animated component scales itself down on small displays. The
//! per-class constants live on [`ViewportClass`] so the particle field, the
//! typewriter and the layout all agree on one breakpoint.

/// Width (CSS pixels) at or below which a viewport counts as small.
pub const DEFAULT_BREAKPOINT: f64 = 768.0;

/// Coarse device class of the current viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportClass {
	/// Phones and narrow windows.
	Small,
	/// Tablets and desktops.
	#[default]
	Regular,
}

impl ViewportClass {
	/// Classify a viewport width against `breakpoint`.
	pub fn classify(width: f64, breakpoint: f64) -> Self {
		if width <= breakpoint {
			ViewportClass::Small
		} else {
			ViewportClass::Regular
		}
	}

	pub fn is_small(self) -> bool {
		self == ViewportClass::Small
	}

	/// Multiplier applied to the requested particle density.
	pub fn density_scale(self) -> f64 {
		match self {
			ViewportClass::Small => 0.3,
			ViewportClass::Regular => 1.0,
		}
	}

	/// Hard upper bound on the particle count of one generation.
	pub fn particle_cap(self) -> usize {
		match self {
			ViewportClass::Small => 30,
			ViewportClass::Regular => 100,
		}
	}

	/// Per-frame movement throttle.
	pub fn frame_speed(self) -> f64 {
		match self {
			ViewportClass::Small => 0.5,
			ViewportClass::Regular => 1.0,
		}
	}

	/// Pixel distance under which two particles get a connecting line.
	pub fn connection_distance(self) -> f64 {
		match self {
			ViewportClass::Small => 60.0,
			ViewportClass::Regular => 100.0,
		}
	}

	/// Peak alpha of a connection line (reached at zero distance).
	pub fn connection_alpha(self) -> f64 {
		match self {
			ViewportClass::Small => 0.15,
			ViewportClass::Regular => 0.2,
		}
	}

	/// Typewriter effects show their full text at once on small displays.
	pub fn skips_typing(self) -> bool {
		self.is_small()
	}
}

/// Current drawable area of the browser window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
	pub breakpoint: f64,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			width: 1280.0,
			height: 720.0,
			breakpoint: DEFAULT_BREAKPOINT,
		}
	}
}

impl Viewport {
	pub fn new(width: f64, height: f64) -> Self {
		Self::with_breakpoint(width, height, DEFAULT_BREAKPOINT)
	}

	pub fn with_breakpoint(width: f64, height: f64, breakpoint: f64) -> Self {
		Self {
			width: width.max(0.0),
			height: height.max(0.0),
			breakpoint,
		}
	}

	pub fn class(&self) -> ViewportClass {
		ViewportClass::classify(self.width, self.breakpoint)
	}

	/// Read the window's inner size. Returns `None` outside a browser.
	pub fn from_window(breakpoint: f64) -> Option<Self> {
		let window = web_sys::window()?;
		let width = window.inner_width().ok()?.as_f64()?;
		let height = window.inner_height().ok()?.as_f64()?;
		Some(Self::with_breakpoint(width, height, breakpoint))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_breakpoint_is_inclusive() {
		assert_eq!(ViewportClass::classify(768.0, 768.0), ViewportClass::Small);
		assert_eq!(ViewportClass::classify(769.0, 768.0), ViewportClass::Regular);
		assert_eq!(ViewportClass::classify(320.0, 768.0), ViewportClass::Small);
	}

	#[test]
	fn test_custom_breakpoint() {
		let vp = Viewport::with_breakpoint(900.0, 600.0, 1024.0);
		assert_eq!(vp.class(), ViewportClass::Small);
		assert!(vp.class().skips_typing());
	}

	#[test]
	fn test_negative_dimensions_clamp_to_zero() {
		let vp = Viewport::new(-5.0, -1.0);
		assert_eq!(vp.width, 0.0);
		assert_eq!(vp.height, 0.0);
	}
}
