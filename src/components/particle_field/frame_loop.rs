//! A cancellable `requestAnimationFrame` loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// Bookkeeping shared between a [`FrameLoop`] and its frame callback.
#[derive(Debug)]
pub struct LoopControl {
	active: Cell<bool>,
	pending: Cell<Option<i32>>,
}

impl Default for LoopControl {
	fn default() -> Self {
		Self {
			active: Cell::new(true),
			pending: Cell::new(None),
		}
	}
}

impl LoopControl {
	/// A frame was dispatched. Returns whether it should run.
	pub fn begin_frame(&self) -> bool {
		self.pending.set(None);
		self.active.get()
	}

	/// Record the id of the next requested frame. Ignored once stopped.
	pub fn armed(&self, id: Option<i32>) {
		if self.active.get() {
			self.pending.set(id);
		}
	}

	/// Deactivate and hand back the request id that still needs cancelling.
	pub fn stop(&self) -> Option<i32> {
		self.active.set(false);
		self.pending.take()
	}

	pub fn is_active(&self) -> bool {
		self.active.get()
	}

	pub fn pending(&self) -> Option<i32> {
		self.pending.get()
	}
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(callback.as_ref().unchecked_ref())
		.ok()
}

/// Calls a frame callback once per display refresh until stopped.
///
/// The callback re-arms itself after each frame. [`FrameLoop::stop`] cancels
/// the pending request and also flips a flag the callback checks first, so a
/// frame that was already dispatched does nothing.
pub struct FrameLoop {
	control: Rc<LoopControl>,
	callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
	/// Start calling `on_frame` every frame. Returns `None` outside a browser.
	pub fn start(mut on_frame: impl FnMut() + 'static) -> Option<Self> {
		web_sys::window()?;
		let control = Rc::new(LoopControl::default());
		let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

		let (control_cb, callback_inner) = (control.clone(), callback.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			if !control_cb.begin_frame() {
				return;
			}
			on_frame();
			if let Some(ref cb) = *callback_inner.borrow() {
				control_cb.armed(request_frame(cb));
			}
		}));

		if let Some(ref cb) = *callback.borrow() {
			control.armed(request_frame(cb));
		}

		Some(Self { control, callback })
	}

	pub fn is_active(&self) -> bool {
		self.control.is_active()
	}

	/// Cancel the pending frame and release the callback.
	pub fn stop(&self) {
		if let Some(id) = self.control.stop() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		// Breaks the callback's reference cycle through `callback_inner`.
		self.callback.borrow_mut().take();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
