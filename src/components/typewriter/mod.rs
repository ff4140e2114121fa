//! Timed character-by-character text reveal.

mod component;
pub mod driver;
pub mod state;

pub use component::TypewriterText;
pub use driver::{Action, RevealDriver};
pub use state::{RevealPhase, RevealTiming, Step, Typewriter};
