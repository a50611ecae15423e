// File: crates/gascost/tests/render.rs
// Purpose: End-to-end ChartRenderer runs: PDF/PNG output, CSV table, failure before output on bad input, legend placement.

use gascost::{render, ChartRenderer, RenderConfig, SeriesKind};
use gascost_chart::legend::badness;
use gascost_chart::{ExportFormat, LegendPosition, Marker};
use std::path::{Path, PathBuf};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/data.json");

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/render").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn config(input: impl AsRef<Path>, output: impl AsRef<Path>) -> RenderConfig {
    let mut c = RenderConfig::with_paths(input.as_ref(), output.as_ref(), 1668.0);
    c.show = false;
    c
}

#[test]
fn well_formed_input_produces_pdf() {
    let dir = out_dir("pdf");
    let out = dir.join("gasfee.pdf");
    let report = render(FIXTURE, &out, 1668.0).expect("render succeeds");

    let bytes = std::fs::read(&out).expect("output exists");
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(report.bytes, bytes.len() as u64);
    assert_eq!(report.format, ExportFormat::Pdf);
    assert_eq!((report.series, report.points), (5, 6));
}

#[test]
fn png_extension_writes_png_and_table() {
    let dir = out_dir("png");
    let mut c = config(FIXTURE, dir.join("gasfee.png"));
    c.table = Some(dir.join("gasfee.csv"));
    let report = ChartRenderer::new(c).run().expect("render succeeds");

    assert_eq!(report.format, ExportFormat::Png);
    let png = std::fs::read(dir.join("gasfee.png")).expect("png");
    assert!(png.starts_with(&[137, 80, 78, 71]));
    let table = std::fs::read_to_string(dir.join("gasfee.csv")).expect("csv");
    assert!(table.starts_with("wardens,deploy,open,pessimisticClose,optimisticClose,pessimisticVClose"));
    assert_eq!(table.lines().count(), 7);
}

#[test]
fn missing_series_fails_before_output_is_written() {
    let dir = out_dir("missing");
    let input = dir.join("data.json");
    std::fs::write(&input, r#"{"deploy":[1,2,3,4,5,6],"open":[1,2,3,4,5,6]}"#).unwrap();
    let out = dir.join("gasfee.pdf");

    let err = ChartRenderer::new(config(&input, &out)).run().unwrap_err();
    assert!(format!("{err:#}").contains("pessimisticClose"), "{err:#}");
    assert!(!out.exists(), "no output on failure");
}

#[test]
fn non_numeric_value_fails_during_coercion() {
    let dir = out_dir("non_numeric");
    let input = dir.join("data.json");
    let json = std::fs::read_to_string(FIXTURE).unwrap().replace("\"3.66\"", "\"n/a\"");
    std::fs::write(&input, json).unwrap();
    let out = dir.join("gasfee.pdf");

    let err = ChartRenderer::new(config(&input, &out)).run().unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("open") && msg.contains("n/a"), "{msg}");
    assert!(!out.exists());
}

#[test]
fn missing_input_file_fails() {
    let dir = out_dir("no_input");
    let out = dir.join("gasfee.pdf");
    let err = ChartRenderer::new(config(dir.join("nope.json"), &out)).run().unwrap_err();
    assert!(format!("{err:#}").contains("nope.json"));
    assert!(!out.exists());
}

#[test]
fn chart_carries_series_styles_and_bounds() {
    let renderer = ChartRenderer::new(config(FIXTURE, "unused.pdf"));
    let results = renderer.load().expect("fixture");
    let chart = renderer.build_chart(&results);

    let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, SeriesKind::ALL.map(|k| k.label()).to_vec());
    assert_eq!(chart.series[0].style.marker, Marker::None);
    assert!(chart.series[1..].iter().all(|s| s.style.marker == Marker::Circle));
    assert_eq!(chart.series[0].data_xy[0], (10.0, 9.43));
    assert_eq!(chart.series[0].data_xy[5], (25.0, 13.39));

    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 14.0));
    assert!(chart.x_axis.min < 10.0 && chart.x_axis.max > 25.0);
    assert_eq!(chart.title, "Gas cost of a Thunderdome");
    let sec = chart.secondary_y.as_ref().expect("ether axis");
    assert_eq!(sec.label, "Ether");
    let (lo, hi) = sec.range(&chart.y_axis);
    assert_eq!(lo, 0.0);
    assert!((hi - 14.0 / 1668.0).abs() < 1e-12);
}

#[test]
fn identical_input_builds_identical_chart() {
    let renderer = ChartRenderer::new(config(FIXTURE, "unused.pdf"));
    let a = renderer.build_chart(&renderer.load().unwrap());
    let b = renderer.build_chart(&renderer.load().unwrap());
    assert_eq!(a.series, b.series);
    assert_eq!(a.x_axis, b.x_axis);
    assert_eq!(a.y_axis, b.y_axis);

    let mut opts = renderer.render_options().unwrap();
    opts.draw_labels = false;
    assert_eq!(a.render_to_rgba8(&opts).unwrap(), b.render_to_rgba8(&opts).unwrap());
}

#[test]
fn page_size_follows_inches() {
    let mut c = config(FIXTURE, "unused.pdf");
    c.chart.width_in = 4.0;
    c.chart.height_in = 3.0;
    let opts = ChartRenderer::new(c).render_options().unwrap();
    assert_eq!((opts.width, opts.height), (288.0, 216.0));
}

#[test]
fn x_ticks_are_the_warden_counts() {
    let renderer = ChartRenderer::new(config(FIXTURE, "unused.pdf"));
    let chart = renderer.build_chart(&renderer.load().unwrap());
    assert_eq!(chart.x_axis.tick_values(), vec![10.0, 13.0, 16.0, 19.0, 22.0, 25.0]);
}

#[cfg(not(feature = "preview"))]
#[test]
fn show_without_preview_feature_still_exports() {
    let dir = out_dir("show_headless");
    let out = dir.join("gasfee.pdf");
    let c = RenderConfig::with_paths(FIXTURE, &out, 1668.0);
    assert!(c.show, "window display is on by default");

    let report = ChartRenderer::new(c).run().expect("render succeeds without a window");
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(report.bytes, bytes.len() as u64);
}

#[test]
fn default_legend_covers_the_least_data() {
    let renderer = ChartRenderer::new(config(FIXTURE, "unused.pdf"));
    let mut chart = renderer.build_chart(&renderer.load().unwrap());
    let mut opts = renderer.render_options().unwrap();
    opts.draw_labels = false;
    assert_eq!(chart.legend, Some(LegendPosition::Best));

    let paths = chart.page_paths(&opts);
    let (_, best) = chart.legend_placement(&opts).expect("legend");
    let best_score = badness(&best, &paths);
    for anchor in LegendPosition::ANCHORS {
        chart.legend = Some(anchor);
        let (_, rect) = chart.legend_placement(&opts).expect("legend");
        assert!(best_score <= badness(&rect, &paths), "{anchor:?} covers less than the chosen spot");
    }
    // the lower corners sit on the close curves
    chart.legend = Some(LegendPosition::LowerLeft);
    let (_, lower_left) = chart.legend_placement(&opts).unwrap();
    assert!(best_score < badness(&lower_left, &paths));
}
