//! Indicated altitude and the needle angle mapping.

use std::f32::consts::TAU;

/// Feet per full revolution of each needle.
pub const COARSE_FULL_SCALE: f32 = 100_000.0;
pub const MEDIUM_FULL_SCALE: f32 = 10_000.0;
pub const FINE_FULL_SCALE: f32 = 1_000.0;

/// Altitude above which the visibility flag turns dark.
pub const FLAG_THRESHOLD: f32 = 10_000.0;

/// Feet added or removed per key press.
pub const DEFAULT_STEP: f32 = 10.0;

/// Maps a reading onto a needle rotation in radians.
///
/// One full scale is one revolution. Readings past the full scale keep
/// growing past 2π; the needle simply wraps around visually.
#[inline]
pub fn sweep_angle(value: f32, full_scale: f32) -> f32 {
    (value / full_scale) * TAU
}

/// Indicated altitude, adjusted from the keyboard.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Altitude {
    feet: f32,
    step: f32,
}

impl Altitude {
    pub fn new(step: f32) -> Self {
        Self { feet: 0.0, step }
    }

    #[inline]
    pub fn feet(&self) -> f32 {
        self.feet
    }

    /// Unbounded upward; the coarse needle wraps past its full scale.
    pub fn increase(&mut self) {
        self.feet += self.step;
    }

    /// Saturates at ground level.
    pub fn decrease(&mut self) {
        self.feet = (self.feet - self.step).max(0.0);
    }
}

impl Default for Altitude {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── sweep_angle ───────────────────────────────────────────────────────

    #[test]
    fn sweep_is_linear_in_value() {
        assert_eq!(sweep_angle(0.0, FINE_FULL_SCALE), 0.0);
        assert_eq!(sweep_angle(500.0, FINE_FULL_SCALE), 0.5 * TAU);
        assert_eq!(sweep_angle(1_000.0, FINE_FULL_SCALE), TAU);
    }

    #[test]
    fn sweep_is_unclamped_past_full_scale() {
        assert_eq!(sweep_angle(2_000.0, FINE_FULL_SCALE), 2.0 * TAU);
    }

    #[test]
    fn altitude_1000_ft_angle_triple() {
        assert_eq!(sweep_angle(1_000.0, FINE_FULL_SCALE), TAU);
        assert_eq!(sweep_angle(1_000.0, MEDIUM_FULL_SCALE), 0.1 * TAU);
        assert_eq!(sweep_angle(1_000.0, COARSE_FULL_SCALE), 0.01 * TAU);
    }

    #[test]
    fn altitude_zero_parks_all_needles() {
        for full_scale in [COARSE_FULL_SCALE, MEDIUM_FULL_SCALE, FINE_FULL_SCALE] {
            assert_eq!(sweep_angle(0.0, full_scale), 0.0);
        }
    }

    // ── altitude adjustment ───────────────────────────────────────────────

    #[test]
    fn increase_accumulates_exact_steps() {
        let mut alt = Altitude::default();
        for _ in 0..7 {
            alt.increase();
        }
        assert_eq!(alt.feet(), 7.0 * DEFAULT_STEP);
    }

    #[test]
    fn decrease_saturates_at_ground() {
        let mut alt = Altitude::default();
        alt.decrease();
        assert_eq!(alt.feet(), 0.0);

        alt.increase();
        alt.decrease();
        alt.decrease();
        assert_eq!(alt.feet(), 0.0);
    }

    #[test]
    fn increase_then_decrease_round_trips() {
        let mut alt = Altitude::default();
        alt.increase();
        alt.increase();
        alt.decrease();
        assert_eq!(alt.feet(), DEFAULT_STEP);
    }
}
