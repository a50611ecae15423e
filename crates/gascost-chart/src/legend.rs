// File: crates/gascost-chart/src/legend.rs
// Summary: Legend placement (fixed anchors or least-overlap `Best`) and drawing of the framed entry box.

use std::str::FromStr;

use skia_safe as skia;

use crate::chart::draw_marker;
use crate::geometry::RectF;
use crate::series::Series;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;

const PAD: f32 = 5.0;
const SWATCH: f32 = 20.0;
const GAP: f32 = 6.0;
/// Box width used for labels when text is disabled.
const PLACEHOLDER_TEXT_WIDTH: f32 = 120.0;

/// Where the legend box sits inside the plot area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendPosition {
    /// The fixed anchor covering the least data.
    #[default]
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
}

impl LegendPosition {
    /// Anchors `Best` chooses from; earlier entries win ties.
    pub const ANCHORS: [LegendPosition; 9] = [
        Self::UpperRight,
        Self::UpperLeft,
        Self::LowerLeft,
        Self::LowerRight,
        Self::CenterLeft,
        Self::CenterRight,
        Self::LowerCenter,
        Self::UpperCenter,
        Self::Center,
    ];
}

impl FromStr for LegendPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "best" => Ok(Self::Best),
            "upper-right" => Ok(Self::UpperRight),
            "upper-left" => Ok(Self::UpperLeft),
            "lower-left" => Ok(Self::LowerLeft),
            "lower-right" => Ok(Self::LowerRight),
            "center-left" => Ok(Self::CenterLeft),
            "center-right" => Ok(Self::CenterRight),
            "lower-center" => Ok(Self::LowerCenter),
            "upper-center" => Ok(Self::UpperCenter),
            "center" => Ok(Self::Center),
            other => Err(format!("unknown legend position `{other}`")),
        }
    }
}

/// Legend box for `rows` entries of `text_width`, placed inside `plot`.
///
/// `Best` depends on the data and is resolved by [`resolve`]; passed here it
/// lands upper right.
pub fn legend_rect(plot: &RectF, pos: LegendPosition, rows: usize, text_width: f32, font_size: f32) -> RectF {
    use LegendPosition::*;
    let row_h = font_size * 1.5;
    let w = PAD * 2.0 + SWATCH + GAP + text_width;
    let h = PAD * 2.0 + row_h * rows as f32;
    let margin = PAD;
    let left = match pos {
        UpperLeft | LowerLeft | CenterLeft => plot.left + margin,
        Best | UpperRight | LowerRight | CenterRight => plot.right - margin - w,
        UpperCenter | LowerCenter | Center => plot.center_x() - w * 0.5,
    };
    let top = match pos {
        Best | UpperLeft | UpperRight | UpperCenter => plot.top + margin,
        LowerLeft | LowerRight | LowerCenter => plot.bottom - margin - h,
        CenterLeft | CenterRight | Center => plot.center_y() - h * 0.5,
    };
    RectF::from_ltwh(left, top, w, h)
}

/// How much of the data `rect` covers: every vertex inside it, plus one for
/// each polyline passing through it.
pub fn badness(rect: &RectF, paths: &[Vec<(f32, f32)>]) -> usize {
    paths
        .iter()
        .map(|path| {
            let vertices = path.iter().filter(|&&(x, y)| rect.contains(x, y)).count();
            let crosses = path.windows(2).any(|seg| segment_hits(rect, seg[0], seg[1]));
            vertices + usize::from(crosses)
        })
        .sum()
}

/// Resolve `Best` to the anchor with the lowest [`badness`]; fixed positions pass through.
pub fn resolve(
    plot: &RectF,
    pos: LegendPosition,
    paths: &[Vec<(f32, f32)>],
    rows: usize,
    text_width: f32,
    font_size: f32,
) -> LegendPosition {
    if pos != LegendPosition::Best {
        return pos;
    }
    let mut best = (LegendPosition::ANCHORS[0], usize::MAX);
    for anchor in LegendPosition::ANCHORS {
        let score = badness(&legend_rect(plot, anchor, rows, text_width, font_size), paths);
        if score < best.1 {
            best = (anchor, score);
        }
        if score == 0 {
            break;
        }
    }
    best.0
}

/// Liang-Barsky clip of segment `a`-`b` against `r`.
fn segment_hits(r: &RectF, a: (f32, f32), b: (f32, f32)) -> bool {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0f32, 1.0f32);
    for (p, q) in [(-dx, a.0 - r.left), (dx, r.right - a.0), (-dy, a.1 - r.top), (dy, r.bottom - a.1)] {
        if p == 0.0 {
            if q < 0.0 {
                return false;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return false;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return false;
            }
            t1 = t1.min(t);
        }
    }
    t0 <= t1
}

/// Labelled entries and the widest label, measured with `shaper` when text is drawn.
fn entries<'a>(series: &'a [Series], shaper: Option<&TextShaper>, font_size: f32) -> (Vec<&'a Series>, f32) {
    let entries: Vec<&Series> = series.iter().filter(|s| !s.label.is_empty()).collect();
    let text_width = match shaper {
        Some(shaper) => entries
            .iter()
            .map(|s| shaper.measure_width(&s.label, font_size, false))
            .fold(0.0f32, f32::max),
        None => PLACEHOLDER_TEXT_WIDTH,
    };
    (entries, text_width)
}

/// Final position and box of the legend, or `None` when no series carries a label.
pub(crate) fn place(
    plot: &RectF,
    pos: LegendPosition,
    series: &[Series],
    paths: &[Vec<(f32, f32)>],
    shaper: Option<&TextShaper>,
    font_size: f32,
) -> Option<(LegendPosition, RectF)> {
    let (entries, text_width) = entries(series, shaper, font_size);
    if entries.is_empty() {
        return None;
    }
    let pos = resolve(plot, pos, paths, entries.len(), text_width, font_size);
    Some((pos, legend_rect(plot, pos, entries.len(), text_width, font_size)))
}

pub(crate) fn draw_legend(
    canvas: &skia::Canvas,
    rect: &RectF,
    series: &[Series],
    theme: &Theme,
    shaper: Option<&TextShaper>,
    font_size: f32,
) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_background);
    let rrect = skia::RRect::new_rect_xy(rect.to_skia(), 2.5, 2.5);
    canvas.draw_rrect(&rrect, &fill);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(0.8);
    border.set_color(theme.legend_border);
    canvas.draw_rrect(&rrect, &border);

    let row_h = font_size * 1.5;
    for (i, s) in series.iter().filter(|s| !s.label.is_empty()).enumerate() {
        let cy = rect.top + PAD + row_h * (i as f32 + 0.5);
        let x0 = rect.left + PAD;
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(s.style.width);
        stroke.set_color(s.style.color);
        canvas.draw_line((x0, cy), (x0 + SWATCH, cy), &stroke);
        draw_marker(canvas, s.style.marker, (x0 + SWATCH * 0.5, cy), s.style.marker_size, s.style.color);
        if let Some(shaper) = shaper {
            shaper.draw(canvas, &s.label, x0 + SWATCH + GAP, cy + font_size * 0.35, Anchor::Left, font_size, theme.legend_text, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positions() {
        assert_eq!("best".parse::<LegendPosition>(), Ok(LegendPosition::Best));
        assert_eq!("upper-left".parse::<LegendPosition>(), Ok(LegendPosition::UpperLeft));
        assert_eq!("Lower_Right".parse::<LegendPosition>(), Ok(LegendPosition::LowerRight));
        assert_eq!("center left".parse::<LegendPosition>(), Ok(LegendPosition::CenterLeft));
        assert!("middle".parse::<LegendPosition>().is_err());
    }

    #[test]
    fn rect_stays_inside_plot() {
        let plot = RectF::from_ltrb(50.0, 30.0, 400.0, 400.0);
        for pos in LegendPosition::ANCHORS {
            let r = legend_rect(&plot, pos, 5, 150.0, 10.0);
            assert!(plot.contains(r.left, r.top) && plot.contains(r.right, r.bottom), "{pos:?}");
        }
    }

    #[test]
    fn segment_through_box_counts_once_per_line() {
        let rect = RectF::from_ltrb(10.0, 10.0, 20.0, 20.0);
        // passes straight through without a vertex inside
        let crossing = vec![(0.0, 15.0), (30.0, 15.0)];
        let outside = vec![(0.0, 0.0), (30.0, 0.0), (30.0, 5.0)];
        let inside = vec![(12.0, 12.0), (14.0, 14.0)];
        assert_eq!(badness(&rect, &[crossing]), 1);
        assert_eq!(badness(&rect, &[outside]), 0);
        assert_eq!(badness(&rect, &[inside]), 3);
    }

    #[test]
    fn best_skips_covered_corners() {
        let plot = RectF::from_ltrb(0.0, 0.0, 400.0, 400.0);
        // a line hugging the top edge rules out both upper corners
        let paths = vec![vec![(0.0, 20.0), (200.0, 25.0), (400.0, 20.0)]];
        let pos = resolve(&plot, LegendPosition::Best, &paths, 3, 100.0, 10.0);
        assert_eq!(pos, LegendPosition::LowerLeft);
        assert_eq!(resolve(&plot, LegendPosition::UpperLeft, &paths, 3, 100.0, 10.0), LegendPosition::UpperLeft);
    }
}
