//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering
//! - uploading the dial texture

mod gpu;
mod texture;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
pub use texture::Texture2d;
