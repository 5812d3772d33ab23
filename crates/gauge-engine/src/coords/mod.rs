//! Coordinate types shared between the runtime and renderers.
//!
//! Canonical CPU space for instrument geometry:
//! - dial space: the unit circle, origin at the pivot, +X right, +Y up
//!
//! The vertex shader letterboxes dial space into the window using a scale
//! uniform derived from the [`Viewport`].

mod viewport;

pub use viewport::Viewport;
