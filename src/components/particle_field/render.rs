//! Canvas rendering for the particle field.
//!
//! Each frame is drawn in two passes over a fully cleared surface:
//! 1. Particles as filled circles at their fixed opacity
//! 2. Connection lines between nearby pairs, faded by distance

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;

/// Width of connection lines in pixels.
pub const CONNECTION_LINE_WIDTH: f64 = 0.5;

/// The drawing operations the renderer needs from a 2D surface.
pub trait Surface {
	fn clear(&self, width: f64, height: f64);
	fn fill_circle(&self, x: f64, y: f64, radius: f64, style: &str);
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, style: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, style: &str) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(style);
		self.fill();
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, style: &str) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(style);
		self.set_line_width(width);
		self.stroke();
	}
}

/// Renders the complete field to the surface.
pub fn render<S: Surface + ?Sized>(field: &ParticleField, surface: &S) {
	surface.clear(field.width(), field.height());
	draw_particles(field, surface);
	draw_connections(field, surface);
}

fn draw_particles<S: Surface + ?Sized>(field: &ParticleField, surface: &S) {
	let color = field.config().color;
	for p in field.particles() {
		surface.fill_circle(p.x, p.y, p.radius, &color.to_hex_alpha(p.opacity));
	}
}

fn draw_connections<S: Surface + ?Sized>(field: &ParticleField, surface: &S) {
	let color = field.config().color;
	let particles = field.particles();
	for link in field.connections() {
		let (a, b) = (&particles[link.a], &particles[link.b]);
		surface.stroke_line(
			(a.x, a.y),
			(b.x, b.y),
			CONNECTION_LINE_WIDTH,
			&color.to_hex_alpha(link.alpha),
		);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::collections::HashSet;

	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::particle_field::particles::ParticleConfig;
	use crate::viewport::Viewport;

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear,
		Circle(String),
		Line((f64, f64), (f64, f64), String),
	}

	#[derive(Default)]
	struct Recorder {
		ops: RefCell<Vec<Op>>,
	}

	impl Surface for Recorder {
		fn clear(&self, _width: f64, _height: f64) {
			self.ops.borrow_mut().push(Op::Clear);
		}

		fn fill_circle(&self, _x: f64, _y: f64, _radius: f64, style: &str) {
			self.ops.borrow_mut().push(Op::Circle(style.to_string()));
		}

		fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, style: &str) {
			assert_eq!(width, CONNECTION_LINE_WIDTH);
			self.ops
				.borrow_mut()
				.push(Op::Line(from, to, style.to_string()));
		}
	}

	fn dense_field() -> ParticleField {
		// Many particles on a small regular surface so most pairs connect.
		ParticleField::new(
			ParticleConfig {
				density: 80,
				..ParticleConfig::default()
			},
			Viewport::with_breakpoint(200.0, 150.0, 100.0),
			&mut StdRng::seed_from_u64(42),
		)
	}

	#[test]
	fn test_frame_starts_with_clear_then_circles() {
		let field = dense_field();
		let surface = Recorder::default();
		render(&field, &surface);

		let ops = surface.ops.borrow();
		assert_eq!(ops[0], Op::Clear);
		let circles = ops.iter().filter(|op| matches!(op, Op::Circle(_))).count();
		assert_eq!(circles, field.particles().len());
		// All circles precede all lines.
		let first_line = ops.iter().position(|op| matches!(op, Op::Line(..)));
		let last_circle = ops.iter().rposition(|op| matches!(op, Op::Circle(_)));
		if let (Some(line), Some(circle)) = (first_line, last_circle) {
			assert!(circle < line);
		}
	}

	#[test]
	fn test_each_pair_is_drawn_once() {
		let field = dense_field();
		let surface = Recorder::default();
		render(&field, &surface);

		let mut seen = HashSet::new();
		for link in field.connections() {
			assert!(link.a < link.b);
			assert!(seen.insert((link.a, link.b)));
			assert!(!seen.contains(&(link.b, link.a)));
		}
		let lines = surface
			.ops
			.borrow()
			.iter()
			.filter(|op| matches!(op, Op::Line(..)))
			.count();
		assert_eq!(lines, seen.len());
		assert!(lines > 0);
	}

	#[test]
	fn test_circle_style_encodes_particle_opacity() {
		let field = dense_field();
		let surface = Recorder::default();
		render(&field, &surface);

		let ops = surface.ops.borrow();
		let Op::Circle(style) = &ops[1] else {
			panic!("expected a circle after the clear");
		};
		let expected = field.config().color.to_hex_alpha(field.particles()[0].opacity);
		assert_eq!(style, &expected);
		assert!(style.starts_with("#00d9ff"));
		assert_eq!(style.len(), 9);
	}
}
