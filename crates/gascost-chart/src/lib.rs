// File: crates/gascost-chart/src/lib.rs
// Summary: Chart backend entry point; exports the public API for line charts with a secondary axis and PDF/PNG export.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod legend;

pub use chart::{Chart, RenderOptions};
pub use series::{LineStyle, Marker, Series};
pub use axis::{Axis, AxisConversion, SecondaryAxis};
pub use geometry::RectF;
pub use legend::LegendPosition;
pub use theme::Theme;
pub use text::TextShaper;
pub use types::{ExportFormat, Insets};
pub use skia_safe::Color;
