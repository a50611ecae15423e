// File: crates/gascost-chart/src/geometry.rs
// Summary: Lightweight geometry helpers for page-space math.

use skia_safe as skia;

use crate::types::Insets;

/// Axis-aligned rectangle in page points (y grows downwards).
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
    /// Page of `width` x `height` shrunk by `insets`; never inverted.
    pub fn inset_page(width: f32, height: f32, insets: &Insets) -> Self {
        let right = (width - insets.right).max(insets.left + 1.0);
        let bottom = (height - insets.bottom).max(insets.top + 1.0);
        Self::from_ltrb(insets.left, insets.top, right, bottom)
    }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}
