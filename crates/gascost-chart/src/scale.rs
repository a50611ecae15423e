// File: crates/gascost-chart/src/scale.rs
// Summary: Linear value <-> page transforms for the X and Y axes.

/// Data-space coordinate.
pub type Value = f64;

/// Maps the value range `[vmin, vmax]` onto the page range `[px_start, px_end]`.
/// For a vertical axis pass `px_start = bottom`, `px_end = top` so values grow upwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { px_start, px_end, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px_start + (t as f32) * (self.px_end - self.px_start)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> Value {
        let span_px = self.px_end - self.px_start;
        if span_px.abs() < f32::EPSILON { return self.vmin; }
        let t = ((px - self.px_start) / span_px) as f64;
        self.vmin + t * (self.vmax - self.vmin)
    }

    /// True when `v` lies within the value range (inclusive, small tolerance).
    pub fn contains(&self, v: Value) -> bool {
        let (lo, hi) = if self.vmin <= self.vmax { (self.vmin, self.vmax) } else { (self.vmax, self.vmin) };
        let eps = (hi - lo).abs() * 1e-9;
        v >= lo - eps && v <= hi + eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_scale_grows_upwards() {
        let s = LinearScale::new(400.0, 0.0, 0.0, 14.0);
        assert_eq!(s.to_px(0.0), 400.0);
        assert_eq!(s.to_px(14.0), 0.0);
        assert!((s.to_px(7.0) - 200.0).abs() < 1e-4);
        assert!((s.from_px(100.0) - 10.5).abs() < 1e-6);
    }

    #[test]
    fn degenerate_range_is_widened() {
        let s = LinearScale::new(0.0, 100.0, 3.0, 3.0);
        assert_eq!(s.vmax, 4.0);
    }
}
