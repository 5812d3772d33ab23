/// Viewport size in logical pixels.
///
/// Renderers derive their NDC mapping from this; for square instrument dials
/// the shorter side defines the dial extent (letterboxing the longer one).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Letterbox scale mapping dial space (unit circle) into NDC while
    /// keeping the dial circular on non-square surfaces.
    #[inline]
    pub fn letterbox_scale(self) -> [f32; 2] {
        let side = self.width.min(self.height).max(1.0);
        [side / self.width.max(1.0), side / self.height.max(1.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letterbox_square_is_identity() {
        assert_eq!(Viewport::new(800.0, 800.0).letterbox_scale(), [1.0, 1.0]);
    }

    #[test]
    fn letterbox_wide_shrinks_x() {
        let [sx, sy] = Viewport::new(1600.0, 800.0).letterbox_scale();
        assert_eq!(sx, 0.5);
        assert_eq!(sy, 1.0);
    }

    #[test]
    fn letterbox_tall_shrinks_y() {
        let [sx, sy] = Viewport::new(600.0, 1200.0).letterbox_scale();
        assert_eq!(sx, 1.0);
        assert_eq!(sy, 0.5);
    }
}
