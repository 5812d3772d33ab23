//! Needle variants and tessellation.
//!
//! The three needles share one parametrized description ([`NeedleSpec`])
//! instead of three hand-unrolled vertex tables: a silhouette is authored
//! once pointing at 12 o'clock, tessellated into a triangle list, and
//! rotated by the reading's sweep angle.

use gauge_engine::paint::Color;
use gauge_engine::render::Vertex;

use crate::altitude::{COARSE_FULL_SCALE, FINE_FULL_SCALE, MEDIUM_FULL_SCALE};
use crate::dial::rotate_cw;

/// Tip silhouette of a needle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TipStyle {
    /// Flat crossbar widening past the shaft end (the coarse needle).
    Bar { half_width: f32, rise: f32 },
    /// Tapered point with shoulders set back from the apex.
    Point { shoulder_half: f32, inset: f32 },
}

/// Counterweight tail behind the pivot.
///
/// The tail runs from `base_half` at the pivot line out to `half_width` at
/// depth `len`, ending in a point `drop` further down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TailSpec {
    pub base_half: f32,
    pub half_width: f32,
    pub len: f32,
    pub drop: f32,
}

/// One needle variant: silhouette, color and the scale it indicates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NeedleSpec {
    pub full_scale: f32,
    pub color: Color,
    /// Half-width of the shaft at the pivot line.
    pub shaft_half: f32,
    /// Distance from the pivot to the shaft end (bar) or apex (point).
    pub shaft_len: f32,
    pub tip: TipStyle,
    pub tail: Option<TailSpec>,
    /// Darker overlay painted on top of the tail.
    pub inner_tail: Option<TailSpec>,
}

const TAIL_OVERLAY_COLOR: Color = Color::BLACK;

/// Coarse needle: 100 000 ft per revolution, thin red shaft with a wide bar tip.
pub const COARSE: NeedleSpec = NeedleSpec {
    full_scale: COARSE_FULL_SCALE,
    color: Color::opaque(1.0, 0.1, 0.1),
    shaft_half: 0.006,
    shaft_len: 0.755,
    tip: TipStyle::Bar { half_width: 0.0456, rise: 0.045 },
    tail: None,
    inner_tail: None,
};

/// Medium needle: 10 000 ft per revolution, short and broad.
pub const MEDIUM: NeedleSpec = NeedleSpec {
    full_scale: MEDIUM_FULL_SCALE,
    color: Color::opaque(0.9, 0.9, 0.9),
    shaft_half: 0.03,
    shaft_len: 0.4,
    tip: TipStyle::Point { shoulder_half: 0.048, inset: 0.1 },
    tail: Some(TailSpec { base_half: 0.03, half_width: 0.046153847, len: 0.1, drop: 0.02 }),
    inner_tail: Some(TailSpec { base_half: 0.025, half_width: 0.038461539, len: 0.09, drop: 0.02 }),
};

/// Fine needle: 1 000 ft per revolution, long and slender.
pub const FINE: NeedleSpec = NeedleSpec {
    full_scale: FINE_FULL_SCALE,
    color: Color::opaque(0.8, 0.8, 0.8),
    shaft_half: 0.015,
    shaft_len: 0.7,
    tip: TipStyle::Point { shoulder_half: 0.015, inset: 0.05 },
    tail: Some(TailSpec { base_half: 0.015, half_width: 0.023076924, len: 0.15, drop: 0.02 }),
    inner_tail: Some(TailSpec { base_half: 0.01, half_width: 0.015384616, len: 0.14, drop: 0.02 }),
};

/// Tessellates a needle at the given rotation, as a triangle list.
///
/// Output order is paint order: the colored body first, then the dark tail
/// overlay when present. Pure and deterministic for identical inputs.
pub fn tessellate(spec: &NeedleSpec, angle: f32) -> Vec<Vertex> {
    let mut body = body_points(spec);
    rotate_cw(&mut body, angle);

    let mut verts: Vec<Vertex> = body
        .iter()
        .map(|&p| Vertex::solid(p, spec.color))
        .collect();

    if let Some(inner) = spec.inner_tail {
        let mut overlay = tail_points(&inner);
        rotate_cw(&mut overlay, angle);
        verts.extend(overlay.iter().map(|&p| Vertex::solid(p, TAIL_OVERLAY_COLOR)));
    }

    verts
}

/// Unrotated triangle list for the colored body (tip + shaft + tail).
fn body_points(spec: &NeedleSpec) -> Vec<[f32; 2]> {
    let mut pts = Vec::with_capacity(18);
    let s = spec.shaft_half;

    match spec.tip {
        TipStyle::Bar { half_width, rise } => {
            let top = spec.shaft_len;
            // Shaft quad.
            pts.extend([
                [-s, 0.0], [s, 0.0], [-s, top],
                [-s, top], [s, top], [s, 0.0],
            ]);
            // Crossbar trapezoid.
            pts.extend([
                [-s, top], [-half_width, top + rise], [s, top],
                [-half_width, top + rise], [half_width, top + rise], [s, top],
            ]);
        }
        TipStyle::Point { shoulder_half, inset } => {
            let apex = spec.shaft_len;
            let sh = apex - inset;
            // Apex triangle, then the shoulders-to-base quad.
            pts.extend([
                [0.0, apex], [-shoulder_half, sh], [shoulder_half, sh],
                [-shoulder_half, sh], [shoulder_half, sh], [s, 0.0],
                [-shoulder_half, sh], [s, 0.0], [-s, 0.0],
            ]);
        }
    }

    if let Some(tail) = spec.tail {
        pts.extend(tail_points(&tail));
    }
    pts
}

/// Unrotated triangle list for a tail (quad + end point).
fn tail_points(tail: &TailSpec) -> Vec<[f32; 2]> {
    let b = tail.base_half;
    let w = tail.half_width;
    let y = -tail.len;

    vec![
        [b, 0.0], [-b, 0.0], [-w, y],
        [b, 0.0], [-w, y], [w, y],
        [-w, y], [w, y], [0.0, y - tail.drop],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, TAU};

    use crate::altitude::sweep_angle;

    // ── vertex counts ─────────────────────────────────────────────────────

    #[test]
    fn coarse_needle_is_four_triangles() {
        assert_eq!(tessellate(&COARSE, 0.0).len(), 12);
    }

    #[test]
    fn tailed_needles_carry_body_and_overlay() {
        // 18 body vertices + 9 overlay vertices.
        assert_eq!(tessellate(&MEDIUM, 0.0).len(), 27);
        assert_eq!(tessellate(&FINE, 0.0).len(), 27);
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn tessellation_is_deterministic() {
        for spec in [COARSE, MEDIUM, FINE] {
            let angle = sweep_angle(4_321.0, spec.full_scale);
            assert_eq!(tessellate(&spec, angle), tessellate(&spec, angle));
        }
    }

    // ── orientation ───────────────────────────────────────────────────────

    #[test]
    fn unrotated_needle_points_at_twelve() {
        let verts = tessellate(&FINE, 0.0);
        let apex = verts[0];
        assert_eq!(apex.pos, [0.0, FINE.shaft_len]);
    }

    #[test]
    fn quarter_scale_reading_points_at_three() {
        // A quarter of the fine scale sweeps the apex clockwise to 3 o'clock.
        let angle = sweep_angle(FINE_FULL_SCALE / 4.0, FINE_FULL_SCALE);
        assert_eq!(angle, TAU / 4.0);

        let verts = tessellate(&FINE, FRAC_PI_2);
        let [x, y] = verts[0].pos;
        assert!((x - FINE.shaft_len).abs() < 1e-6);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn overlay_is_painted_after_body() {
        let verts = tessellate(&MEDIUM, 0.0);
        assert_eq!(verts[0].color, MEDIUM.color.to_array());
        assert_eq!(verts[26].color, TAIL_OVERLAY_COLOR.to_array());
    }
}
