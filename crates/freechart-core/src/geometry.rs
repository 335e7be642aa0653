// File: crates/freechart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// Pixel position on the drawing surface.
pub type Px = (f32, f32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Horizontal containment, edges included, with a half-pixel tolerance.
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.left - 0.5 && x <= self.right + 0.5
    }
    /// Vertical containment, edges included, with a half-pixel tolerance.
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.top - 0.5 && y <= self.bottom + 0.5
    }
}
