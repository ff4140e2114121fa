//! Leptos component wrapping the particle canvas.
//!
//! The component creates a full-viewport canvas behind its siblings. Once the
//! canvas is mounted, a [`FrameLoop`] advances and redraws the field every
//! frame. Viewport changes come from the shared [`ViewportSignal`]: the canvas
//! is resized and a new particle generation is sampled without restarting
//! the loop.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::frame_loop::FrameLoop;
use super::particles::{DEFAULT_DENSITY, DEFAULT_SPEED, ParticleConfig, ParticleField};
use super::render;
use crate::context::ViewportSignal;
use crate::theme::Color;
use crate::viewport::Viewport;

/// Simulation state shared between the frame callback and the resize watcher.
struct FieldContext {
	field: ParticleField,
	rng: StdRng,
	canvas: HtmlCanvasElement,
}

fn size_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
	canvas.set_width(viewport.width as u32);
	canvas.set_height(viewport.height as u32);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Renders an ambient field of drifting, interconnected points.
///
/// `color` may change at runtime (e.g. on a theme switch); doing so starts a
/// fresh generation in the new color. If no 2D context can be acquired the
/// canvas simply stays empty.
#[component]
pub fn ParticleBackground(
	#[prop(default = DEFAULT_DENSITY)] density: usize,
	#[prop(into, optional)] color: Option<Signal<Color>>,
	#[prop(default = DEFAULT_SPEED)] speed: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let viewport = expect_context::<ViewportSignal>().0;
	let color = color.unwrap_or_else(|| Signal::stored(Color::CYAN));

	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let frame_loop = StoredValue::new_local(None::<FrameLoop>);

	let context_init = context.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let config = ParticleConfig {
			density,
			color: color.get(),
			speed,
		};
		let vp = viewport.get_untracked();

		// A new configuration replaces the running loop wholesale.
		frame_loop.update_value(|running| {
			if let Some(old) = running.take() {
				old.stop();
			}
		});
		context_init.borrow_mut().take();

		let Some(ctx) = context_2d(&canvas) else {
			debug!("folio: no 2d canvas context, particle background disabled");
			return;
		};

		size_canvas(&canvas, vp);
		let mut rng = StdRng::from_entropy();
		let field = ParticleField::new(config, vp, &mut rng);
		info!(
			"folio: particle field created with {} particles ({:?})",
			field.particles().len(),
			field.class()
		);
		*context_init.borrow_mut() = Some(FieldContext { field, rng, canvas });

		let context_anim = context_init.clone();
		let started = FrameLoop::start(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.field.step();
				render::render(&c.field, &ctx);
			}
		});
		frame_loop.set_value(started);
	});

	let context_resize = context.clone();
	Effect::watch(
		move || viewport.get(),
		move |vp, _, _| {
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				size_canvas(&c.canvas, *vp);
				c.field.resize(*vp, &mut c.rng);
				debug!(
					"folio: particle generation {} for {}x{}",
					c.field.generation(),
					vp.width,
					vp.height
				);
			}
		},
		false,
	);

	on_cleanup(move || {
		frame_loop.try_update_value(|running| {
			if let Some(old) = running.take() {
				old.stop();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-background"
			style="position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none; z-index: -1;"
		/>
	}
}
