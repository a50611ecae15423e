// File: crates/gascost-chart/src/series.rs
// Summary: Line series model: labelled (x, y) points plus stroke and marker style.

use skia_safe as skia;

/// Point decoration drawn at every data point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    None,
    Circle,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: skia::Color,
    pub width: f32,
    pub marker: Marker,
    /// Marker diameter in points.
    pub marker_size: f32,
}

impl LineStyle {
    pub fn new(color: skia::Color) -> Self {
        Self { color, width: 1.5, marker: Marker::None, marker_size: 6.0 }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new(skia::Color::from_argb(255, 31, 119, 180))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Legend entry; empty labels are left out of the legend.
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    pub style: LineStyle,
}

impl Series {
    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data, style: LineStyle::default() }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Bounding box of the data as `(x_min, x_max, y_min, y_max)`.
    pub fn extents(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.data_xy.iter();
        let &(x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(xl, xh, yl, yh), &(x, y)| {
            (xl.min(x), xh.max(x), yl.min(y), yh.max(y))
        }))
    }
}
