// File: crates/gascost-chart/src/theme.rs
// Summary: Paper/dark theming for chart chrome (background, frame, ticks, text, legend).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub legend_text: skia::Color,
}

impl Theme {
    /// Print-friendly white page with black chrome.
    pub fn paper() -> Self {
        Self {
            name: "paper",
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 230, 230, 230),
            axis_line: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            tick_label: skia::Color::BLACK,
            title: skia::Color::BLACK,
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            legend_text: skia::Color::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_background: skia::Color::from_argb(220, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::paper() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::paper(), Theme::dark()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
