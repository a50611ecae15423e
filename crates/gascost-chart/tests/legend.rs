// File: crates/gascost-chart/tests/legend.rs
// Purpose: Legend placement on a real chart: `Best` avoids the data, fixed anchors are honoured.

use gascost_chart::legend::badness;
use gascost_chart::{Axis, Chart, LegendPosition, RenderOptions, Series};

fn chart_with(points: Vec<(f64, f64)>) -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 10.0);
    chart.y_axis = Axis::new("Y", 0.0, 10.0);
    chart.add_series(Series::with_data("rising", points));
    chart
}

fn opts() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts
}

#[test]
fn best_is_the_default_and_leaves_data_uncovered() {
    let chart = chart_with(vec![(0.0, 0.0), (2.0, 1.0), (4.0, 2.0)]);
    assert_eq!(chart.legend, Some(LegendPosition::Best));

    let (pos, rect) = chart.legend_placement(&opts()).expect("legend");
    assert_eq!(pos, LegendPosition::UpperRight);
    let paths = chart.page_paths(&opts());
    assert!(paths[0].iter().all(|&(x, y)| !rect.contains(x, y)));
    assert_eq!(badness(&rect, &paths), 0);
}

#[test]
fn best_moves_away_from_data_in_the_first_corner() {
    let chart = chart_with(vec![(6.0, 8.0), (8.0, 9.0), (10.0, 10.0)]);
    let (pos, rect) = chart.legend_placement(&opts()).expect("legend");
    assert_eq!(pos, LegendPosition::UpperLeft);
    assert_eq!(badness(&rect, &chart.page_paths(&opts())), 0);
}

#[test]
fn fixed_anchor_is_kept_even_when_covered() {
    let mut chart = chart_with(vec![(0.0, 0.0), (2.0, 1.0), (4.0, 2.0)]);
    chart.legend = Some(LegendPosition::LowerLeft);
    let (pos, rect) = chart.legend_placement(&opts()).expect("legend");
    assert_eq!(pos, LegendPosition::LowerLeft);
    assert!(badness(&rect, &chart.page_paths(&opts())) > 0);
}

#[test]
fn unlabelled_series_have_no_legend() {
    let mut chart = chart_with(vec![(0.0, 0.0), (1.0, 1.0)]);
    chart.series[0].label.clear();
    assert!(chart.legend_placement(&opts()).is_none());
}
