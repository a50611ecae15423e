// File: crates/gascost-chart/src/chart.rs
// Summary: Chart struct and rendering pipeline: Skia PDF documents for vector export, CPU raster surfaces for PNG/RGBA.

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use crate::axis::{Axis, SecondaryAxis};
use crate::geometry::RectF;
use crate::grid::{format_ticks, linspace};
use crate::legend::{self, LegendPosition};
use crate::scale::LinearScale;
use crate::series::{Marker, Series};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{ExportFormat, Insets, HEIGHT, WIDTH};

const TICK_LEN: f32 = 3.5;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Page width in points.
    pub width: f32,
    /// Page height in points.
    pub height: f32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, axis labels, tick labels, legend labels). Disable for
    /// font-independent pixel output.
    pub draw_labels: bool,
    pub draw_grid: bool,
    /// Raster pixels per point for PNG/RGBA output.
    pub raster_scale: f32,
    pub title_size: f32,
    pub label_size: f32,
    pub tick_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::paper(),
            draw_labels: true,
            draw_grid: false,
            raster_scale: 2.0,
            title_size: 12.0,
            label_size: 10.0,
            tick_size: 9.0,
        }
    }
}

#[derive(Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub secondary_y: Option<SecondaryAxis>,
    pub legend: Option<LegendPosition>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            secondary_y: None,
            legend: Some(LegendPosition::default()),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit the X range to the data, padded by `margin` of the span on each side.
    pub fn autoscale_x(&mut self, margin: f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for (xl, xh, _, _) in self.series.iter().filter_map(Series::extents) {
            lo = lo.min(xl);
            hi = hi.max(xh);
        }
        if !lo.is_finite() || !hi.is_finite() { return; }
        if (hi - lo).abs() < 1e-9 { hi = lo + 1.0; }
        let pad = (hi - lo) * margin.max(0.0);
        self.x_axis.min = lo - pad;
        self.x_axis.max = hi + pad;
    }

    /// Render a single-page PDF document into memory.
    pub fn render_to_pdf_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut bytes: Vec<u8> = Vec::new();
        {
            let document = skia::pdf::new_document(&mut bytes, None);
            let mut page = document.begin_page((opts.width, opts.height), None);
            self.paint(page.canvas(), opts);
            let document = page.end_page();
            document.close();
        }
        if bytes.is_empty() {
            anyhow::bail!("PDF backend produced no output");
        }
        Ok(bytes)
    }

    /// Render the chart to a PDF at `output_pdf_path`.
    pub fn render_to_pdf(&self, opts: &RenderOptions, output_pdf_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_pdf_bytes(opts)?;
        write_output(output_pdf_path.as_ref(), &bytes)
    }

    /// Render to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster(opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None::<skia::ColorSpace>);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back raster pixels");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Write the chart in `format` to `path`; returns the number of bytes written.
    pub fn export(&self, opts: &RenderOptions, path: impl AsRef<Path>, format: ExportFormat) -> Result<u64> {
        let bytes = match format {
            ExportFormat::Pdf => self.render_to_pdf_bytes(opts)?,
            ExportFormat::Png => self.render_to_png_bytes(opts)?,
        };
        write_output(path.as_ref(), &bytes)?;
        Ok(bytes.len() as u64)
    }

    /// Series vertices in page points, one path per series.
    pub fn page_paths(&self, opts: &RenderOptions) -> Vec<Vec<(f32, f32)>> {
        let (_, xs, ys) = self.frame(opts);
        project(&self.series, &xs, &ys)
    }

    /// Where the legend lands on the page, with `Best` resolved against the data.
    pub fn legend_placement(&self, opts: &RenderOptions) -> Option<(LegendPosition, RectF)> {
        let (plot, xs, ys) = self.frame(opts);
        let shaper = opts.draw_labels.then(TextShaper::new);
        self.place_legend(opts, &plot, &xs, &ys, shaper.as_ref())
    }

    fn place_legend(
        &self,
        opts: &RenderOptions,
        plot: &RectF,
        xs: &LinearScale,
        ys: &LinearScale,
        shaper: Option<&TextShaper>,
    ) -> Option<(LegendPosition, RectF)> {
        let pos = self.legend?;
        let paths = project(&self.series, xs, ys);
        legend::place(plot, pos, &self.series, &paths, shaper, opts.label_size)
    }

    fn frame(&self, opts: &RenderOptions) -> (RectF, LinearScale, LinearScale) {
        let plot = RectF::inset_page(opts.width, opts.height, &opts.insets);
        let xs = LinearScale::new(plot.left, plot.right, self.x_axis.min, self.x_axis.max);
        let ys = LinearScale::new(plot.bottom, plot.top, self.y_axis.min, self.y_axis.max);
        (plot, xs, ys)
    }

    fn raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let scale = opts.raster_scale.max(0.1);
        let w = (opts.width * scale).round().max(1.0) as i32;
        let h = (opts.height * scale).round().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.scale((scale, scale));
        self.paint(canvas, opts);
        Ok(surface)
    }

    /// Draw the whole figure in page points onto `canvas`.
    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let mut bg = skia::Paint::default();
        bg.set_color(theme.background);
        canvas.draw_rect(skia::Rect::from_wh(opts.width, opts.height), &bg);

        let (plot, xs, ys) = self.frame(opts);
        let shaper = opts.draw_labels.then(TextShaper::new);

        if opts.draw_grid {
            draw_grid(canvas, &plot, theme);
        }

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, &xs, &ys, s);
        }
        canvas.restore();

        draw_frame(canvas, &plot, theme);
        draw_x_ticks(canvas, &plot, &xs, &self.x_axis, theme, shaper.as_ref(), opts.tick_size);
        draw_y_ticks(canvas, &plot, &ys, &self.y_axis, theme, shaper.as_ref(), opts.tick_size);
        if let Some(sec) = &self.secondary_y {
            draw_secondary_ticks(canvas, &plot, &ys, &self.y_axis, sec, theme, shaper.as_ref(), opts.tick_size);
        }

        if let Some(shaper) = &shaper {
            draw_labels(canvas, shaper, &plot, self, opts);
        }

        if let Some((pos, rect)) = self.place_legend(opts, &plot, &xs, &ys, shaper.as_ref()) {
            debug!(?pos, "legend placed");
            legend::draw_legend(canvas, &rect, &self.series, theme, shaper.as_ref(), opts.label_size);
        }
        debug!(series = self.series.len(), width = opts.width, height = opts.height, "chart painted");
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn project(series: &[Series], xs: &LinearScale, ys: &LinearScale) -> Vec<Vec<(f32, f32)>> {
    series
        .iter()
        .map(|s| s.data_xy.iter().map(|&(x, y)| (xs.to_px(x), ys.to_px(y))).collect())
        .collect()
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, plot: &RectF, theme: &Theme) {
    let paint = stroke_paint(theme.grid, 0.5);
    // verticals
    for x in linspace(plot.left as f64, plot.right as f64, 10) {
        canvas.draw_line((x as f32, plot.top), (x as f32, plot.bottom), &paint);
    }
    // horizontals
    for y in linspace(plot.top as f64, plot.bottom as f64, 8) {
        canvas.draw_line((plot.left, y as f32), (plot.right, y as f32), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: &RectF, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 0.8);
    canvas.draw_rect(plot.to_skia(), &paint);
}

fn draw_x_ticks(
    canvas: &skia::Canvas,
    plot: &RectF,
    xs: &LinearScale,
    axis: &Axis,
    theme: &Theme,
    shaper: Option<&TextShaper>,
    size: f32,
) {
    let paint = stroke_paint(theme.tick, 0.8);
    let ticks = axis.tick_values();
    let labels = format_ticks(&ticks);
    for (v, label) in ticks.iter().zip(&labels) {
        let x = xs.to_px(*v);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + TICK_LEN), &paint);
        if let Some(shaper) = shaper {
            shaper.draw(canvas, label, x, plot.bottom + TICK_LEN + size + 2.0, Anchor::Center, size, theme.tick_label, false);
        }
    }
}

fn draw_y_ticks(
    canvas: &skia::Canvas,
    plot: &RectF,
    ys: &LinearScale,
    axis: &Axis,
    theme: &Theme,
    shaper: Option<&TextShaper>,
    size: f32,
) {
    let paint = stroke_paint(theme.tick, 0.8);
    let ticks = axis.tick_values();
    let labels = format_ticks(&ticks);
    for (v, label) in ticks.iter().zip(&labels) {
        let y = ys.to_px(*v);
        canvas.draw_line((plot.left - TICK_LEN, y), (plot.left, y), &paint);
        if let Some(shaper) = shaper {
            shaper.draw(canvas, label, plot.left - TICK_LEN - 2.0, y + size * 0.35, Anchor::Right, size, theme.tick_label, false);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_secondary_ticks(
    canvas: &skia::Canvas,
    plot: &RectF,
    ys: &LinearScale,
    primary: &Axis,
    secondary: &SecondaryAxis,
    theme: &Theme,
    shaper: Option<&TextShaper>,
    size: f32,
) {
    let paint = stroke_paint(theme.tick, 0.8);
    let ticks = secondary.ticks(primary);
    let values: Vec<f64> = ticks.iter().map(|(s, _)| *s).collect();
    let labels = format_ticks(&values);
    for ((_, at), label) in ticks.iter().zip(&labels) {
        if !ys.contains(*at) { continue; }
        let y = ys.to_px(*at);
        canvas.draw_line((plot.right, y), (plot.right + TICK_LEN, y), &paint);
        if let Some(shaper) = shaper {
            shaper.draw(canvas, label, plot.right + TICK_LEN + 2.0, y + size * 0.35, Anchor::Left, size, theme.tick_label, false);
        }
    }
}

fn draw_labels(canvas: &skia::Canvas, shaper: &TextShaper, plot: &RectF, chart: &Chart, opts: &RenderOptions) {
    let theme = &opts.theme;
    if !chart.title.is_empty() {
        shaper.draw(canvas, &chart.title, plot.center_x(), plot.top - 10.0, Anchor::Center, opts.title_size, theme.title, false);
    }
    if !chart.x_axis.label.is_empty() {
        let y = plot.bottom + TICK_LEN + opts.tick_size + opts.label_size + 10.0;
        shaper.draw(canvas, &chart.x_axis.label, plot.center_x(), y, Anchor::Center, opts.label_size, theme.axis_label, false);
    }
    if !chart.y_axis.label.is_empty() {
        let x = (plot.left - opts.insets.left + opts.label_size).max(opts.label_size * 0.5);
        shaper.draw_vertical(canvas, &chart.y_axis.label, x, plot.center_y(), opts.label_size, theme.axis_label);
    }
    if let Some(sec) = chart.secondary_y.as_ref().filter(|s| !s.label.is_empty()) {
        let x = plot.right + opts.insets.right - opts.label_size;
        shaper.draw_vertical(canvas, &sec.label, x, plot.center_y(), opts.label_size, theme.axis_label);
    }
}

fn draw_line_series(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }
    let style = &series.style;

    if data.len() >= 2 {
        let mut builder = skia::PathBuilder::new();
        let (x0, y0) = data[0];
        builder.move_to((xs.to_px(x0), ys.to_px(y0)));
        for &(x, y) in data.iter().skip(1) {
            builder.line_to((xs.to_px(x), ys.to_px(y)));
        }
        let path = builder.detach();
        let mut stroke = stroke_paint(style.color, style.width);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        canvas.draw_path(&path, &stroke);
    }

    for &(x, y) in data {
        draw_marker(canvas, style.marker, (xs.to_px(x), ys.to_px(y)), style.marker_size, style.color);
    }
}

pub(crate) fn draw_marker(canvas: &skia::Canvas, marker: Marker, center: (f32, f32), size: f32, color: skia::Color) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);
    let half = size * 0.5;
    match marker {
        Marker::None => {}
        Marker::Circle => {
            canvas.draw_circle(center, half, &fill);
        }
        Marker::Square => {
            let rect = skia::Rect::from_ltrb(center.0 - half, center.1 - half, center.0 + half, center.1 + half);
            canvas.draw_rect(rect, &fill);
        }
    }
}
