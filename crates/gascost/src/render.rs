// File: crates/gascost/src/render.rs
// Summary: ChartRenderer: results file -> typed ResultSet -> line chart with Ether axis -> PDF/PNG on disk.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gascost_chart::types::POINTS_PER_INCH;
use gascost_chart::{Axis, Chart, ExportFormat, RenderOptions, SecondaryAxis, Series};
use tracing::{debug, info, warn};

use crate::config::RenderConfig;
use crate::convert::EurEth;
use crate::preview;
use crate::results::{ResultSet, ResultsError, SeriesKind};

/// Horizontal padding around the warden range, as a fraction of its span.
const X_MARGIN: f64 = 0.05;

/// What a finished run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderReport {
    pub output: PathBuf,
    pub format: ExportFormat,
    pub bytes: u64,
    pub series: usize,
    pub points: usize,
    pub table: Option<PathBuf>,
}

pub struct ChartRenderer {
    config: RenderConfig,
}

impl ChartRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Read and validate the configured results file.
    pub fn load(&self) -> Result<ResultSet, ResultsError> {
        ResultSet::load(&self.config.input, &self.config.wardens)
    }

    /// Build the in-memory chart for `results`.
    pub fn build_chart(&self, results: &ResultSet) -> Chart {
        let c = &self.config.chart;
        let mut chart = Chart::new();
        chart.title = c.title.clone();
        for kind in SeriesKind::ALL {
            chart.add_series(Series::with_data(kind.label(), results.points(kind)).with_style(kind.style()));
        }
        // one tick per measured warden count
        chart.x_axis = Axis::new(c.x_label.clone(), 0.0, 1.0).with_ticks(results.x_values());
        chart.autoscale_x(X_MARGIN);
        chart.y_axis = Axis::new(c.y_label.clone(), c.y_min, c.y_max);
        chart.secondary_y = Some(SecondaryAxis::new(c.secondary_label.clone(), EurEth::new(self.config.eur_in_eth)));
        // validate() has already vetted the legend name
        chart.legend = Some(self.config.legend_position().unwrap_or_default());
        chart
    }

    /// Page and raster options from the configuration.
    pub fn render_options(&self) -> Result<RenderOptions> {
        let c = &self.config.chart;
        let mut opts = RenderOptions::default();
        opts.width = c.width_in * POINTS_PER_INCH;
        opts.height = c.height_in * POINTS_PER_INCH;
        opts.theme = self.config.theme()?;
        opts.draw_grid = c.grid;
        Ok(opts)
    }

    /// Load, build, optionally preview, then export.
    pub fn run(&self) -> Result<RenderReport> {
        self.config.validate().context("invalid render configuration")?;
        let input = &self.config.input;
        info!(input = %input.display(), "loading results");
        let results = self.load().with_context(|| format!("failed to load results '{}'", input.display()))?;
        let (lo, hi) = results.value_range();
        info!(series = SeriesKind::ALL.len(), points = results.wardens.len(), "loaded results");
        debug!("value range [{lo:.4}, {hi:.4}]");
        if lo < self.config.chart.y_min || hi > self.config.chart.y_max {
            warn!(
                "values span [{lo:.4}, {hi:.4}] but the y axis is fixed to [{}, {}]; points outside are clipped",
                self.config.chart.y_min,
                self.config.chart.y_max
            );
        }

        let chart = self.build_chart(&results);
        let opts = self.render_options()?;

        if self.config.show {
            preview::show(&chart, &opts).context("preview window failed")?;
        }

        let output = &self.config.output;
        let format = ExportFormat::from_path(output);
        let bytes = chart
            .export(&opts, output, format)
            .with_context(|| format!("failed to export chart to '{}'", output.display()))?;
        info!(output = %output.display(), bytes, format = format.extension(), "wrote chart");

        let table = match &self.config.table {
            Some(path) => {
                write_table(&results, path)?;
                info!(table = %path.display(), "wrote results table");
                Some(path.clone())
            }
            None => None,
        };

        Ok(RenderReport {
            output: output.clone(),
            format,
            bytes,
            series: chart.series.len(),
            points: results.wardens.len(),
            table,
        })
    }
}

/// Render `input` to `output` with the given EUR/ETH rate and default cosmetics.
pub fn render(input: impl AsRef<Path>, output: impl AsRef<Path>, eur_in_eth: f64) -> Result<RenderReport> {
    let mut config = RenderConfig::with_paths(input.as_ref(), output.as_ref(), eur_in_eth);
    config.show = false;
    ChartRenderer::new(config).run()
}

fn write_table(results: &ResultSet, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    results
        .write_csv(BufWriter::new(file))
        .with_context(|| format!("writing {}", path.display()))
}
