// File: crates/gascost-chart/src/axis.rs
// Summary: Axis model with labels, ranges, tick placement, and a unit-converted secondary axis.

use crate::grid::nice_ticks;

/// Default number of tick intervals the auto-ticker aims for.
pub const DEFAULT_TICK_TARGET: usize = 7;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Explicit tick positions; `None` picks nice ticks over `[min, max]`.
    pub ticks: Option<Vec<f64>>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: None }
    }

    pub fn with_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.ticks = Some(ticks);
        self
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 100.0)
    }

    /// Tick values that fall inside the axis range.
    pub fn tick_values(&self) -> Vec<f64> {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        match &self.ticks {
            Some(t) => t.iter().copied().filter(|v| *v >= lo && *v <= hi).collect(),
            None => nice_ticks(lo, hi, DEFAULT_TICK_TARGET),
        }
    }
}

/// A pair of mutually inverse functions relating primary-axis values to a second unit.
pub trait AxisConversion {
    /// Primary unit to secondary unit.
    fn forward(&self, v: f64) -> f64;
    /// Secondary unit back to primary unit.
    fn inverse(&self, v: f64) -> f64;
}

/// Right-hand axis reading the primary Y range in another unit.
pub struct SecondaryAxis {
    pub label: String,
    pub conversion: Box<dyn AxisConversion>,
    pub tick_target: usize,
}

impl SecondaryAxis {
    pub fn new(label: impl Into<String>, conversion: impl AxisConversion + 'static) -> Self {
        Self { label: label.into(), conversion: Box::new(conversion), tick_target: 5 }
    }

    /// Secondary-unit range covering the primary range `[min, max]`.
    pub fn range(&self, primary: &Axis) -> (f64, f64) {
        let a = self.conversion.forward(primary.min);
        let b = self.conversion.forward(primary.max);
        (a.min(b), a.max(b))
    }

    /// Ticks as `(secondary value, primary value)` pairs; the primary value is
    /// where the tick sits on the shared vertical scale.
    pub fn ticks(&self, primary: &Axis) -> Vec<(f64, f64)> {
        let (lo, hi) = self.range(primary);
        nice_ticks(lo, hi, self.tick_target)
            .into_iter()
            .map(|t| (t, self.conversion.inverse(t)))
            .collect()
    }
}

impl std::fmt::Debug for SecondaryAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecondaryAxis")
            .field("label", &self.label)
            .field("tick_target", &self.tick_target)
            .finish_non_exhaustive()
    }
}
