// File: crates/gascost-chart/src/types.rs
// Summary: Shared types and constants (page sizes, paddings, export formats).

use std::path::Path;
use std::str::FromStr;

/// Points per inch; PDF user space is measured in points.
pub const POINTS_PER_INCH: f32 = 72.0;
/// Default page width in points (6.2 in).
pub const WIDTH: f32 = 6.2 * POINTS_PER_INCH;
/// Default page height in points (6.2 in).
pub const HEIGHT: f32 = 6.2 * POINTS_PER_INCH;

/// Page margins around the plot area, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    /// Create new insets; negative inputs are clamped to zero.
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left: left.max(0.0), right: right.max(0.0), top: top.max(0.0), bottom: bottom.max(0.0) }
    }
}

impl Default for Insets {
    // Room for tick labels and rotated axis labels on both vertical sides.
    fn default() -> Self {
        Self::new(52.0, 60.0, 34.0, 44.0)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported export format `{0}` (expected pdf or png)")]
pub struct UnknownFormat(pub String);

/// Output file format of an exported chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Pdf,
    Png,
}

impl ExportFormat {
    /// Pick a format from the path extension; anything but `.png` is PDF.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
            .unwrap_or_default()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "png" => Ok(ExportFormat::Png),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}
