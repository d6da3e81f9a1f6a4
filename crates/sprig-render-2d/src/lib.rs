//! 2D drawing for the sprig UI toolkit.
//!
//! Widgets draw through the [`Canvas`] trait. [`SoftwareRenderer`] is the
//! in-memory implementation used for headless rendering and tests.

mod canvas;
mod software;

pub use canvas::Canvas;
pub use software::SoftwareRenderer;
