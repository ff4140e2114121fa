//! Particle simulation: generation, per-frame drift and edge wrapping.

use rand::Rng;

use crate::theme::Color;
use crate::viewport::{Viewport, ViewportClass};

pub const DEFAULT_DENSITY: usize = 50;
pub const DEFAULT_SPEED: f64 = 0.5;

/// Caller-facing knobs for a particle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleConfig {
	/// Target particle count before the device-class adjustment.
	pub density: usize,
	/// Base hue for dots and connection lines.
	pub color: Color,
	/// Velocity scale applied when particles are created.
	pub speed: f64,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			density: DEFAULT_DENSITY,
			color: Color::CYAN,
			speed: DEFAULT_SPEED,
		}
	}
}

/// A single drifting point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
}

impl Particle {
	/// Sample a particle uniformly inside a `width` x `height` surface.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, speed: f64) -> Self {
		Self {
			x: rng.r#gen::<f64>() * width,
			y: rng.r#gen::<f64>() * height,
			vx: (rng.r#gen::<f64>() - 0.5) * speed,
			vy: (rng.r#gen::<f64>() - 0.5) * speed,
			radius: 1.0 + rng.r#gen::<f64>() * 2.0,
			opacity: 0.2 + rng.r#gen::<f64>() * 0.5,
		}
	}
}

/// A pair of particles close enough to be joined by a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	/// Index of the first particle; always less than `b`.
	pub a: usize,
	pub b: usize,
	pub distance: f64,
	/// Line alpha, fading linearly to zero at the connection distance.
	pub alpha: f64,
}

/// Number of particles one generation holds for `density` on `class`.
pub fn particle_count(density: usize, class: ViewportClass) -> usize {
	let adjusted = (density as f64 * class.density_scale()).floor() as usize;
	adjusted.min(class.particle_cap())
}

/// Wrap `value` into `[0, max)`. A zero-sized axis pins everything to 0.
pub fn wrap(value: f64, max: f64) -> f64 {
	if max.is_nan() || max <= 0.0 || !value.is_finite() {
		return 0.0;
	}
	let wrapped = value.rem_euclid(max);
	// rem_euclid can round up to `max` for tiny negative inputs.
	if wrapped >= max { 0.0 } else { wrapped }
}

/// One generation of particles bound to a viewport size.
///
/// A resize throws the whole generation away and samples a new one; no
/// particle state carries over.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
	class: ViewportClass,
	config: ParticleConfig,
	generation: u64,
}

impl ParticleField {
	pub fn new<R: Rng + ?Sized>(config: ParticleConfig, viewport: Viewport, rng: &mut R) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			width: viewport.width,
			height: viewport.height,
			class: viewport.class(),
			config,
			generation: 0,
		};
		field.populate(rng);
		field
	}

	fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		let count = particle_count(self.config.density, self.class);
		self.particles = (0..count)
			.map(|_| Particle::random(rng, self.width, self.height, self.config.speed))
			.collect();
	}

	/// Adopt a new viewport and regenerate every particle.
	pub fn resize<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
		self.width = viewport.width;
		self.height = viewport.height;
		self.class = viewport.class();
		self.generation += 1;
		self.populate(rng);
	}

	/// Advance every particle by one frame.
	///
	/// Each frame moves a particle by `velocity × speed`, halved again on
	/// small viewports.
	pub fn step(&mut self) {
		let effective = self.config.speed * self.class.frame_speed();
		for p in &mut self.particles {
			p.x = wrap(p.x + p.vx * effective, self.width);
			p.y = wrap(p.y + p.vy * effective, self.height);
		}
	}

	/// Every unordered pair closer than the connection distance, each pair once with `a < b`.
	pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
		let max_distance = self.class.connection_distance();
		let peak_alpha = self.class.connection_alpha();
		self.particles.iter().enumerate().flat_map(move |(i, p)| {
			self.particles[i + 1..]
				.iter()
				.enumerate()
				.filter_map(move |(offset, q)| {
					let (dx, dy) = (p.x - q.x, p.y - q.y);
					let distance = (dx * dx + dy * dy).sqrt();
					(distance < max_distance).then(|| Connection {
						a: i,
						b: i + 1 + offset,
						distance,
						alpha: (1.0 - distance / max_distance) * peak_alpha,
					})
				})
		})
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn class(&self) -> ViewportClass {
		self.class
	}

	pub fn config(&self) -> &ParticleConfig {
		&self.config
	}

	/// Incremented on every resize-triggered regeneration.
	pub fn generation(&self) -> u64 {
		self.generation
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn rng() -> StdRng {
		StdRng::seed_from_u64(7)
	}

	fn config(density: usize) -> ParticleConfig {
		ParticleConfig {
			density,
			..ParticleConfig::default()
		}
	}

	fn particle_at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 1.0,
			opacity: 0.5,
		}
	}

	#[test]
	fn test_particle_count_formula() {
		assert_eq!(particle_count(50, ViewportClass::Regular), 50);
		assert_eq!(particle_count(200, ViewportClass::Regular), 100);
		assert_eq!(particle_count(50, ViewportClass::Small), 15);
		assert_eq!(particle_count(200, ViewportClass::Small), 30);
		assert_eq!(particle_count(0, ViewportClass::Regular), 0);
	}

	#[test]
	fn test_generation_respects_count_and_ranges() {
		let field = ParticleField::new(config(60), Viewport::new(1024.0, 768.0), &mut rng());
		assert_eq!(field.particles().len(), 60);
		for p in field.particles() {
			assert!((0.0..1024.0).contains(&p.x));
			assert!((0.0..768.0).contains(&p.y));
			assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
			assert!((1.0..=3.0).contains(&p.radius));
			assert!((0.2..=0.7).contains(&p.opacity));
		}
	}

	#[test]
	fn test_step_applies_speed_on_regular_viewport() {
		let mut field = ParticleField::new(config(1), Viewport::new(1000.0, 1000.0), &mut rng());
		field.particles = vec![Particle {
			vx: 0.2,
			vy: -0.1,
			..particle_at(10.0, 10.0)
		}];
		field.step();
		let p = &field.particles()[0];
		// Default speed 0.5 scales each frame's displacement.
		assert!((p.x - 10.1).abs() < 1e-9, "x = {}", p.x);
		assert!((p.y - 9.95).abs() < 1e-9, "y = {}", p.y);
	}

	#[test]
	fn test_step_scales_with_configured_speed() {
		let viewport = Viewport::new(1000.0, 1000.0);
		let mut slow = ParticleField::new(
			ParticleConfig {
				density: 1,
				speed: 0.3,
				..ParticleConfig::default()
			},
			viewport,
			&mut rng(),
		);
		slow.particles = vec![Particle {
			vx: 1.0,
			..particle_at(100.0, 100.0)
		}];
		slow.step();
		assert!((slow.particles()[0].x - 100.3).abs() < 1e-9);
	}

	#[test]
	fn test_step_is_throttled_on_small_viewport() {
		let mut field = ParticleField::new(config(10), Viewport::new(400.0, 800.0), &mut rng());
		field.particles = vec![Particle {
			vx: 0.2,
			..particle_at(10.0, 10.0)
		}];
		field.step();
		// 0.2 × speed 0.5 × small-viewport throttle 0.5
		assert!((field.particles()[0].x - 10.05).abs() < 1e-9);
	}

	#[test]
	fn test_wrap_keeps_coordinates_in_bounds() {
		assert_eq!(wrap(-0.5, 100.0), 99.5);
		assert_eq!(wrap(100.0, 100.0), 0.0);
		assert_eq!(wrap(100.25, 100.0), 0.25);
		assert_eq!(wrap(-1e-18, 100.0), 0.0);
		assert_eq!(wrap(5.0, 0.0), 0.0);
	}

	#[test]
	fn test_positions_stay_in_bounds_over_many_frames() {
		let mut field = ParticleField::new(
			ParticleConfig {
				density: 100,
				speed: 40.0,
				..ParticleConfig::default()
			},
			Viewport::new(800.0, 300.0),
			&mut rng(),
		);
		for _ in 0..500 {
			field.step();
			for p in field.particles() {
				assert!(p.x >= 0.0 && p.x < 800.0, "x out of bounds: {}", p.x);
				assert!(p.y >= 0.0 && p.y < 300.0, "y out of bounds: {}", p.y);
			}
		}
	}

	#[test]
	fn test_resize_regenerates_for_new_class() {
		let mut rng = rng();
		let mut field = ParticleField::new(config(50), Viewport::new(1280.0, 720.0), &mut rng);
		let before = field.particles().to_vec();
		field.resize(Viewport::new(375.0, 812.0), &mut rng);
		assert_eq!(field.class(), ViewportClass::Small);
		assert_eq!(field.particles().len(), 15);
		assert_eq!(field.generation(), 1);
		assert!(field.particles().iter().all(|p| !before.contains(p)));
		assert!(field.particles().iter().all(|p| p.x < 375.0 && p.y < 812.0));
	}

	#[test]
	fn test_connections_are_unordered_pairs_within_distance() {
		let mut field = ParticleField::new(config(3), Viewport::new(1000.0, 1000.0), &mut rng());
		field.particles = vec![
			particle_at(0.0, 0.0),
			particle_at(30.0, 40.0),
			particle_at(500.0, 500.0),
		];
		let links: Vec<_> = field.connections().collect();
		assert_eq!(links.len(), 1);
		assert_eq!((links[0].a, links[0].b), (0, 1));
		assert!((links[0].distance - 50.0).abs() < 1e-9);
		assert!((links[0].alpha - 0.1).abs() < 1e-9);
	}

	#[test]
	fn test_small_viewport_uses_shorter_connections() {
		let mut field = ParticleField::new(config(10), Viewport::new(500.0, 500.0), &mut rng());
		field.particles = vec![particle_at(0.0, 0.0), particle_at(70.0, 0.0)];
		assert_eq!(field.connections().count(), 0);
		field.particles[1].x = 30.0;
		let link = field.connections().next().unwrap();
		assert!((link.alpha - 0.075).abs() < 1e-9);
	}
}
