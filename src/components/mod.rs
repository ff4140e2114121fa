//! UI components. Each animated component keeps its rules in a plain state
//! type next to it, so they can be tested without a browser.

pub mod audio;
pub mod hero;
pub mod layout;
pub mod maintenance;
pub mod pages;
pub mod particle_field;
pub mod social_grid;
pub mod typewriter;
