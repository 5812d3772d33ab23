//! Core engine-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and the
//! instrument application: key delivery and a per-frame render context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
