// File: crates/gascost/src/results.rs
// Summary: Typed gas-cost result set: the five expected series, loaded from JSON and validated against the warden axis.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use gascost_chart::{Color, LineStyle, Marker};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("failed to read results file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("results file {path} is not a JSON object of value arrays: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("series `{0}` is missing from the results")]
    MissingSeries(&'static str),
    #[error("series `{series}` value #{index} is not a number: {value:?}")]
    NonNumeric { series: &'static str, index: usize, value: String },
    #[error("series `{series}` value #{index} is not finite")]
    NonFinite { series: &'static str, index: usize },
    #[error("series `{series}` has {found} points but the warden axis has {expected}")]
    LengthMismatch { series: &'static str, expected: usize, found: usize },
    #[error("the warden axis is empty")]
    EmptyAxis,
}

/// The five measured operations, in plotting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeriesKind {
    Deploy,
    Open,
    PessimisticClose,
    OptimisticClose,
    PessimisticVClose,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 5] = [
        SeriesKind::Deploy,
        SeriesKind::Open,
        SeriesKind::PessimisticClose,
        SeriesKind::OptimisticClose,
        SeriesKind::PessimisticVClose,
    ];

    /// Key in the results JSON.
    pub fn key(&self) -> &'static str {
        match self {
            SeriesKind::Deploy => "deploy",
            SeriesKind::Open => "open",
            SeriesKind::PessimisticClose => "pessimisticClose",
            SeriesKind::OptimisticClose => "optimisticClose",
            SeriesKind::PessimisticVClose => "pessimisticVClose",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeriesKind::Deploy => "Cost of deployment",
            SeriesKind::Open => "Cost of opening",
            SeriesKind::PessimisticClose => "Cost of pessimistic close",
            SeriesKind::OptimisticClose => "Cost of optimistic close",
            SeriesKind::PessimisticVClose => "Cost of pessimistic virtual close",
        }
    }

    pub fn style(&self) -> LineStyle {
        match self {
            SeriesKind::Deploy => LineStyle::new(Color::from_argb(255, 128, 0, 128)),
            SeriesKind::Open => LineStyle::new(Color::from_argb(255, 255, 0, 0)).with_marker(Marker::Circle),
            SeriesKind::PessimisticClose => LineStyle::new(Color::from_argb(255, 0, 128, 0)).with_marker(Marker::Circle),
            SeriesKind::OptimisticClose => LineStyle::new(Color::from_argb(255, 0, 0, 255)).with_marker(Marker::Circle),
            SeriesKind::PessimisticVClose => LineStyle::new(Color::from_argb(255, 191, 191, 0)).with_marker(Marker::Circle),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A value as written by the measuring script: a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    fn to_f64(&self, series: SeriesKind, index: usize) -> Result<f64, ResultsError> {
        let v = match self {
            RawValue::Number(n) => *n,
            RawValue::Text(s) => s.trim().parse::<f64>().map_err(|_| ResultsError::NonNumeric {
                series: series.key(),
                index,
                value: s.clone(),
            })?,
        };
        if !v.is_finite() {
            return Err(ResultsError::NonFinite { series: series.key(), index });
        }
        Ok(v)
    }
}

/// Gas costs per operation, one value per warden count.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSet {
    pub wardens: Vec<u32>,
    pub deploy: Vec<f64>,
    pub open: Vec<f64>,
    pub pessimistic_close: Vec<f64>,
    pub optimistic_close: Vec<f64>,
    pub pessimistic_v_close: Vec<f64>,
}

impl ResultSet {
    /// Read, coerce, and validate the results file at `path` against `wardens`.
    pub fn load(path: impl AsRef<Path>, wardens: &[u32]) -> Result<Self, ResultsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ResultsError::Io { path: path.to_path_buf(), source })?;
        let raw: BTreeMap<String, Vec<RawValue>> = serde_json::from_str(&text)
            .map_err(|source| ResultsError::Json { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), keys = raw.len(), "results parsed");
        Self::from_raw(raw, wardens)
    }

    /// Same as [`ResultSet::load`] for an in-memory JSON document.
    pub fn from_json_str(json: &str, wardens: &[u32]) -> Result<Self, ResultsError> {
        let raw: BTreeMap<String, Vec<RawValue>> = serde_json::from_str(json)
            .map_err(|source| ResultsError::Json { path: PathBuf::from("<memory>"), source })?;
        Self::from_raw(raw, wardens)
    }

    fn from_raw(mut raw: BTreeMap<String, Vec<RawValue>>, wardens: &[u32]) -> Result<Self, ResultsError> {
        if wardens.is_empty() {
            return Err(ResultsError::EmptyAxis);
        }
        let mut take = |kind: SeriesKind| -> Result<Vec<f64>, ResultsError> {
            let values = raw.remove(kind.key()).ok_or(ResultsError::MissingSeries(kind.key()))?;
            let values = values
                .iter()
                .enumerate()
                .map(|(i, v)| v.to_f64(kind, i))
                .collect::<Result<Vec<_>, _>>()?;
            if values.len() != wardens.len() {
                return Err(ResultsError::LengthMismatch {
                    series: kind.key(),
                    expected: wardens.len(),
                    found: values.len(),
                });
            }
            Ok(values)
        };
        let set = ResultSet {
            wardens: wardens.to_vec(),
            deploy: take(SeriesKind::Deploy)?,
            open: take(SeriesKind::Open)?,
            pessimistic_close: take(SeriesKind::PessimisticClose)?,
            optimistic_close: take(SeriesKind::OptimisticClose)?,
            pessimistic_v_close: take(SeriesKind::PessimisticVClose)?,
        };
        for extra in raw.keys() {
            warn!(key = %extra, "ignoring unknown series in results");
        }
        Ok(set)
    }

    pub fn series(&self, kind: SeriesKind) -> &[f64] {
        match kind {
            SeriesKind::Deploy => &self.deploy,
            SeriesKind::Open => &self.open,
            SeriesKind::PessimisticClose => &self.pessimistic_close,
            SeriesKind::OptimisticClose => &self.optimistic_close,
            SeriesKind::PessimisticVClose => &self.pessimistic_v_close,
        }
    }

    /// Warden counts as chart x values.
    pub fn x_values(&self) -> Vec<f64> {
        self.wardens.iter().map(|&n| n as f64).collect()
    }

    /// `(x, y)` points of one series.
    pub fn points(&self, kind: SeriesKind) -> Vec<(f64, f64)> {
        self.x_values().into_iter().zip(self.series(kind).iter().copied()).collect()
    }

    /// Smallest and largest value across all series.
    pub fn value_range(&self) -> (f64, f64) {
        SeriesKind::ALL
            .iter()
            .flat_map(|k| self.series(*k).iter().copied())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }

    /// Write the table as CSV: one row per warden count, one column per series.
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        let mut header = vec!["wardens"];
        header.extend(SeriesKind::ALL.iter().map(|k| k.key()));
        wtr.write_record(&header)?;
        for (i, n) in self.wardens.iter().enumerate() {
            let mut row = vec![n.to_string()];
            row.extend(SeriesKind::ALL.iter().map(|k| self.series(*k)[i].to_string()));
            wtr.write_record(&row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
