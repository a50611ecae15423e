// File: crates/gascost/src/lib.rs
// Summary: Library entry point; exposes the results model, configuration, and ChartRenderer.

//! Gas-cost chart renderer.
//!
//! Loads the per-operation gas costs measured for growing numbers of
//! wardens, plots them as five lines with a Euro axis on the left and an
//! Ether axis on the right, and exports the figure as PDF (or PNG).

pub mod config;
pub mod convert;
pub mod preview;
pub mod render;
pub mod results;

pub use config::{ChartConfig, ConfigError, RenderConfig};
pub use convert::{EurEth, EUR_IN_ETH};
pub use render::{render, ChartRenderer, RenderReport};
pub use results::{ResultSet, ResultsError, SeriesKind};
