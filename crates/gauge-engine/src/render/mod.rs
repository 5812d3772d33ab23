//! GPU rendering subsystem.
//!
//! The instrument painter consumes a recorded [`DrawList`] and issues wgpu
//! commands. Order in the list is paint order (painter's algorithm, no depth
//! buffer): later batches occlude earlier ones.
//!
//! Convention:
//! - CPU geometry is in dial space (unit circle, origin at the pivot, +Y up)
//! - the vertex shader letterboxes dial space into NDC via a scale uniform

mod ctx;
mod list;
mod painter;

pub use ctx::{RenderCtx, RenderTarget};
pub use list::{Batch, DrawList, Topology, Vertex};
pub use painter::InstrumentPainter;
