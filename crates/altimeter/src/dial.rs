//! Static dial parts: textured face, rim outline, hub and visibility flag.
//!
//! All generators are pure and deterministic; geometry lives in dial space
//! (unit circle, +Y toward the 12 o'clock mark).

use std::f32::consts::TAU;

use gauge_engine::paint::Color;
use gauge_engine::render::Vertex;

use crate::altitude::FLAG_THRESHOLD;

pub const DIAL_RADIUS: f32 = 1.0;
pub const FACE_SEGMENTS: u32 = 100;
pub const OUTLINE_SEGMENTS: u32 = 200;

pub const HUB_RADIUS: f32 = 0.025;
pub const HUB_SEGMENTS: u32 = 72;

/// Visibility flag placement, below the pivot.
pub const FLAG_LEFT: f32 = -0.15;
pub const FLAG_RIGHT: f32 = 0.15;
pub const FLAG_BOTTOM: f32 = -0.35;
pub const FLAG_TOP: f32 = -0.2;
pub const FLAG_INSET: f32 = 0.08;

pub const OUTLINE_COLOR: Color = Color::WHITE;
pub const HUB_OUTER_COLOR: Color = Color::BLACK;
pub const HUB_INNER_COLOR: Color = Color::WHITE;

const FLAG_DARK: Color = Color::opaque(0.1, 0.1, 0.1);
const FLAG_LIGHT: Color = Color::WHITE;

/// Rotates dial-space points clockwise by `angle` radians, in place.
///
/// Needles are authored pointing at 12 o'clock; increasing readings sweep
/// them clockwise like the real instrument.
pub fn rotate_cw(points: &mut [[f32; 2]], angle: f32) {
    let (sin, cos) = angle.sin_cos();
    for p in points.iter_mut() {
        let [x, y] = *p;
        *p = [x * cos + y * sin, y * cos - x * sin];
    }
}

/// Textured dial face: a fan over the unit circle, as a triangle list.
pub fn dial_face(segments: u32) -> Vec<Vertex> {
    let step = TAU / segments as f32;
    let center = face_vertex(0.0, 0.0);

    let mut verts = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        let a0 = i as f32 * step;
        let a1 = (i + 1) as f32 * step;
        verts.push(center);
        verts.push(face_vertex(DIAL_RADIUS * a0.cos(), DIAL_RADIUS * a0.sin()));
        verts.push(face_vertex(DIAL_RADIUS * a1.cos(), DIAL_RADIUS * a1.sin()));
    }
    verts
}

// Texture v runs top-down: v = 0 lands on the top of the dial (y = +1).
fn face_vertex(x: f32, y: f32) -> Vertex {
    let u = (x + DIAL_RADIUS) / (2.0 * DIAL_RADIUS);
    let v = (DIAL_RADIUS - y) / (2.0 * DIAL_RADIUS);
    Vertex::textured([x, y], [u, v])
}

/// Dial rim as a closed line strip (first point repeated at the end).
pub fn dial_outline(segments: u32, color: Color) -> Vec<Vertex> {
    let step = TAU / segments as f32;
    (0..=segments)
        .map(|i| {
            let a = i as f32 * step;
            Vertex::solid([DIAL_RADIUS * a.cos(), DIAL_RADIUS * a.sin()], color)
        })
        .collect()
}

/// Filled disc around the pivot, as a triangle list.
pub fn disc(radius: f32, segments: u32, color: Color) -> Vec<Vertex> {
    let step = TAU / segments as f32;
    let center = Vertex::solid([0.0, 0.0], color);

    let mut verts = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        let a0 = i as f32 * step;
        let a1 = (i + 1) as f32 * step;
        verts.push(center);
        verts.push(Vertex::solid([radius * a0.cos(), radius * a0.sin()], color));
        verts.push(Vertex::solid([radius * a1.cos(), radius * a1.sin()], color));
    }
    verts
}

/// Visibility flag trapezoid between two horizontal edges.
///
/// `inset` pulls the upper edge's corners inward, giving the flag its
/// tapered shape.
pub fn flag_trapezoid(
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    inset: f32,
    color: Color,
) -> Vec<Vertex> {
    let corners = [
        [x1, y1],
        [x2, y1],
        [x2 - inset, y2],
        [x1 + inset, y2],
    ];

    vec![
        Vertex::solid(corners[0], color),
        Vertex::solid(corners[1], color),
        Vertex::solid(corners[2], color),
        Vertex::solid(corners[0], color),
        Vertex::solid(corners[2], color),
        Vertex::solid(corners[3], color),
    ]
}

/// Flag color rule: dark above the warning threshold, light at or below it.
/// The boundary is exact; there is no hysteresis.
pub fn flag_color(feet: f32) -> Color {
    if feet > FLAG_THRESHOLD {
        FLAG_DARK
    } else {
        FLAG_LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn rotate_by_zero_is_identity() {
        let mut pts = [[0.25, 0.75], [-0.5, 0.1]];
        let original = pts;
        rotate_cw(&mut pts, 0.0);
        assert_eq!(pts, original);
    }

    #[test]
    fn rotate_quarter_turn_is_clockwise() {
        let mut pts = [[0.0, 1.0]];
        rotate_cw(&mut pts, std::f32::consts::FRAC_PI_2);
        let [x, y] = pts[0];
        assert!((x - 1.0).abs() < 1e-6);
        assert!(y.abs() < 1e-6);
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn generators_are_deterministic() {
        assert_eq!(dial_face(FACE_SEGMENTS), dial_face(FACE_SEGMENTS));
        assert_eq!(
            dial_outline(OUTLINE_SEGMENTS, OUTLINE_COLOR),
            dial_outline(OUTLINE_SEGMENTS, OUTLINE_COLOR)
        );
        assert_eq!(
            disc(HUB_RADIUS, HUB_SEGMENTS, HUB_OUTER_COLOR),
            disc(HUB_RADIUS, HUB_SEGMENTS, HUB_OUTER_COLOR)
        );
    }

    // ── dial face ─────────────────────────────────────────────────────────

    #[test]
    fn face_vertex_count_matches_segments() {
        assert_eq!(dial_face(FACE_SEGMENTS).len(), FACE_SEGMENTS as usize * 3);
    }

    #[test]
    fn face_uvs_stay_in_unit_square() {
        for v in dial_face(FACE_SEGMENTS) {
            assert!((0.0..=1.0).contains(&v.uv[0]), "u out of range: {}", v.uv[0]);
            assert!((0.0..=1.0).contains(&v.uv[1]), "v out of range: {}", v.uv[1]);
            assert_eq!(v.textured, 1.0);
        }
    }

    #[test]
    fn face_top_maps_to_texture_top() {
        // y = +1 (12 o'clock) must sample v = 0.
        let v = face_vertex(0.0, DIAL_RADIUS);
        assert_eq!(v.uv, [0.5, 0.0]);
    }

    // ── outline ───────────────────────────────────────────────────────────

    #[test]
    fn outline_is_closed() {
        let outline = dial_outline(OUTLINE_SEGMENTS, OUTLINE_COLOR);
        assert_eq!(outline.len(), OUTLINE_SEGMENTS as usize + 1);

        let first = outline[0].pos;
        let last = outline[outline.len() - 1].pos;
        assert!((first[0] - last[0]).abs() < 1e-4);
        assert!((first[1] - last[1]).abs() < 1e-4);
    }

    // ── flag ──────────────────────────────────────────────────────────────

    #[test]
    fn flag_light_at_and_below_threshold() {
        assert_eq!(flag_color(0.0), FLAG_LIGHT);
        assert_eq!(flag_color(FLAG_THRESHOLD), FLAG_LIGHT);
    }

    #[test]
    fn flag_dark_above_threshold() {
        assert_eq!(flag_color(FLAG_THRESHOLD + 10.0), FLAG_DARK);
    }

    #[test]
    fn flag_trapezoid_corners() {
        let flag = flag_trapezoid(
            FLAG_LEFT,
            FLAG_BOTTOM,
            FLAG_RIGHT,
            FLAG_TOP,
            FLAG_INSET,
            FLAG_LIGHT,
        );
        assert_eq!(flag.len(), 6);

        assert_eq!(flag[0].pos, [FLAG_LEFT, FLAG_BOTTOM]);
        assert_eq!(flag[1].pos, [FLAG_RIGHT, FLAG_BOTTOM]);
        assert_eq!(flag[2].pos, [FLAG_RIGHT - FLAG_INSET, FLAG_TOP]);
        assert_eq!(flag[5].pos, [FLAG_LEFT + FLAG_INSET, FLAG_TOP]);
    }
}
