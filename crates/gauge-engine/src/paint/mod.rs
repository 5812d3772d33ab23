//! Paint model shared between instrument code and renderers.
//!
//! Instrument fills are plain opaque colors; there is no gradient or image
//! paint source beyond the single dial texture owned by the painter.

mod color;

pub use color::Color;
