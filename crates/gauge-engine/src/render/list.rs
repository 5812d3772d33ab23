use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// Vertex consumed by the instrument shader.
///
/// `textured` selects the fragment source: 1.0 samples the dial texture,
/// 0.0 uses `color`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
    pub textured: f32,
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2, // uv
        2 => Float32x4, // color
        3 => Float32    // textured
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    /// Solid-color vertex.
    #[inline]
    pub fn solid(pos: [f32; 2], color: Color) -> Self {
        Self {
            pos,
            uv: [0.0, 0.0],
            color: color.to_array(),
            textured: 0.0,
        }
    }

    /// Dial-texture vertex.
    #[inline]
    pub fn textured(pos: [f32; 2], uv: [f32; 2]) -> Self {
        Self {
            pos,
            uv,
            color: [1.0, 1.0, 1.0, 1.0],
            textured: 1.0,
        }
    }
}

/// Primitive topology of a batch.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Topology {
    TriangleList,
    LineStrip,
}

/// Contiguous vertex range drawn with one pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub topology: Topology,
    pub range: Range<u32>,
}

/// Recorded draw stream for one frame, in paint order.
///
/// Vertices live in one growing buffer, regenerated every frame and uploaded
/// in a single write. Consecutive triangle submissions merge into one batch:
/// within a triangle list, draw order already matches submission order, so
/// occlusion is preserved. Line strips always start their own batch.
#[derive(Debug, Default)]
pub struct DrawList {
    vertices: Vec<Vertex>,
    batches: Vec<Batch>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded geometry. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.batches.clear();
    }

    /// Appends a triangle list (length must be a multiple of 3).
    pub fn push_triangles(&mut self, verts: &[Vertex]) {
        debug_assert!(verts.len() % 3 == 0, "triangle list length not divisible by 3");
        if verts.is_empty() {
            return;
        }

        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(verts);
        let end = self.vertices.len() as u32;

        match self.batches.last_mut() {
            Some(batch) if batch.topology == Topology::TriangleList && batch.range.end == start => {
                batch.range.end = end;
            }
            _ => self.batches.push(Batch {
                topology: Topology::TriangleList,
                range: start..end,
            }),
        }
    }

    /// Appends a line strip as its own batch.
    pub fn push_line_strip(&mut self, verts: &[Vertex]) {
        if verts.len() < 2 {
            return;
        }

        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(verts);
        let end = self.vertices.len() as u32;

        self.batches.push(Batch {
            topology: Topology::LineStrip,
            range: start..end,
        });
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(offset: f32) -> [Vertex; 3] {
        [
            Vertex::solid([offset, 0.0], Color::WHITE),
            Vertex::solid([offset + 1.0, 0.0], Color::WHITE),
            Vertex::solid([offset, 1.0], Color::WHITE),
        ]
    }

    // ── batching ──────────────────────────────────────────────────────────

    #[test]
    fn consecutive_triangles_merge_into_one_batch() {
        let mut list = DrawList::new();
        list.push_triangles(&tri(0.0));
        list.push_triangles(&tri(2.0));

        assert_eq!(list.batches().len(), 1);
        assert_eq!(list.batches()[0].range, 0..6);
    }

    #[test]
    fn line_strip_splits_triangle_batches() {
        let mut list = DrawList::new();
        list.push_triangles(&tri(0.0));
        list.push_line_strip(&[
            Vertex::solid([0.0, 0.0], Color::WHITE),
            Vertex::solid([1.0, 1.0], Color::WHITE),
        ]);
        list.push_triangles(&tri(2.0));

        let topologies: Vec<Topology> = list.batches().iter().map(|b| b.topology).collect();
        assert_eq!(
            topologies,
            vec![Topology::TriangleList, Topology::LineStrip, Topology::TriangleList]
        );
    }

    #[test]
    fn batches_cover_all_vertices_in_order() {
        let mut list = DrawList::new();
        list.push_triangles(&tri(0.0));
        list.push_line_strip(&[
            Vertex::solid([0.0, 0.0], Color::WHITE),
            Vertex::solid([1.0, 1.0], Color::WHITE),
            Vertex::solid([2.0, 0.0], Color::WHITE),
        ]);

        let mut cursor = 0u32;
        for batch in list.batches() {
            assert_eq!(batch.range.start, cursor);
            cursor = batch.range.end;
        }
        assert_eq!(cursor as usize, list.vertices().len());
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn empty_submissions_record_nothing() {
        let mut list = DrawList::new();
        list.push_triangles(&[]);
        list.push_line_strip(&[Vertex::solid([0.0, 0.0], Color::WHITE)]);

        assert!(list.is_empty());
        assert!(list.batches().is_empty());
    }

    #[test]
    fn clear_resets_recorded_stream() {
        let mut list = DrawList::new();
        list.push_triangles(&tri(0.0));
        list.clear();

        assert!(list.is_empty());
        assert!(list.batches().is_empty());
    }
}
