// File: crates/gascost-chart/tests/secondary_axis.rs
// Purpose: Secondary axis ticks are chosen in the second unit and placed through the inverse conversion.

use gascost_chart::{Axis, AxisConversion, Chart, RenderOptions, SecondaryAxis, Series};

struct Scale(f64);

impl AxisConversion for Scale {
    fn forward(&self, v: f64) -> f64 { v / self.0 }
    fn inverse(&self, v: f64) -> f64 { v * self.0 }
}

#[test]
fn range_follows_forward_conversion() {
    let primary = Axis::new("EUR", 0.0, 14.0);
    let sec = SecondaryAxis::new("ETH", Scale(1668.0));
    let (lo, hi) = sec.range(&primary);
    assert_eq!(lo, 0.0);
    assert!((hi - 14.0 / 1668.0).abs() < 1e-15);
}

#[test]
fn ticks_sit_at_inverse_positions() {
    let primary = Axis::new("EUR", 0.0, 14.0);
    let sec = SecondaryAxis::new("ETH", Scale(1668.0));
    let ticks = sec.ticks(&primary);
    assert!(!ticks.is_empty());
    for (eth, eur) in &ticks {
        assert!((eur - eth * 1668.0).abs() < 1e-9);
        assert!(*eur >= 0.0 && *eur <= 14.0 + 1e-9);
    }
    let values: Vec<f64> = ticks.iter().map(|(eth, _)| *eth).collect();
    assert_eq!(gascost_chart::grid::format_ticks(&values), vec!["0.000", "0.002", "0.004", "0.006", "0.008"]);
}

#[test]
fn chart_with_secondary_axis_renders() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("n", 10.0, 25.0);
    chart.y_axis = Axis::new("EUR", 0.0, 14.0);
    chart.secondary_y = Some(SecondaryAxis::new("ETH", Scale(1668.0)));
    chart.add_series(Series::with_data("open", vec![(10.0, 3.0), (25.0, 9.0)]));

    let bytes = chart.render_to_pdf_bytes(&RenderOptions::default()).expect("pdf");
    assert!(bytes.starts_with(b"%PDF"));
}
