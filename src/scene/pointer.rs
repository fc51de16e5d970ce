//! Pointer tracking in normalized device coordinates.

/// Last known pointer position, both axes in [-1, 1] with +y up. Starts at the
/// viewport center.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Update from normalized coordinates, clamping to the valid range.
    /// Non-finite input is ignored per axis.
    pub fn set_ndc(&mut self, x: f32, y: f32) {
        if x.is_finite() {
            self.x = x.clamp(-1.0, 1.0);
        }
        if y.is_finite() {
            self.y = y.clamp(-1.0, 1.0);
        }
    }

    /// Update from pixel coordinates with a top-left origin, the convention of
    /// windowing event streams. The y axis is flipped so +y is up.
    pub fn set_pixels(&mut self, px: f32, py: f32, width: u32, height: u32) {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        self.set_ndc(px / w * 2.0 - 1.0, -(py / h * 2.0 - 1.0));
    }
}
