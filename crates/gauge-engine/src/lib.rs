//! Gauge engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by instrument
//! front-ends: window/event loop, wgpu device and surface management,
//! keyboard input, draw-list recording and the instrument painter.

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod logging;
pub mod paint;
pub mod render;
