//! Decorative particle canvas.
//!
//! Renders a field of drifting points on an HTML canvas with:
//! - Particle counts, speed and connection reach scaled to the viewport class
//! - Edge wrapping, so the field never thins out
//! - Faded connection lines between nearby pairs
//! - A fresh generation sampled whenever the viewport size changes
//!
//! # Example
//!
//! ```ignore
//! view! { <ParticleBackground density=60 speed=0.3 color=Signal::derive(move || theme.get().particle_color()) /> }
//! ```

mod component;
mod frame_loop;
pub mod particles;
pub mod render;

pub use component::ParticleBackground;
pub use particles::{Connection, Particle, ParticleConfig, ParticleField, particle_count};
pub use render::Surface;
