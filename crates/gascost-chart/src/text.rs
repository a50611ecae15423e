// File: crates/gascost-chart/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; anchored and rotated drawing for axis text.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor of a text run relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, mono_numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if mono_numeric {
            ts.set_font_families(&["DejaVu Sans Mono", "Menlo", "Consolas", "Roboto Mono", "monospace"]);
        } else {
            ts.set_font_families(&["DejaVu Sans", "Helvetica", "Arial", "Segoe UI", "Roboto", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, mono_numeric);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, mono_numeric: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::TRANSPARENT, mono_numeric);
        p.longest_line()
    }

    /// Draw `text` with its baseline at `y`, anchored horizontally at `x`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        anchor: Anchor,
        size: f32,
        color: skia::Color,
        mono_numeric: bool,
    ) {
        let mut p = self.layout(text, size, color, mono_numeric);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - w * 0.5,
            Anchor::Right => x - w,
        };
        // Paragraph draws from top-left; shift by the first line's ascent
        let ascent = p.alphabetic_baseline();
        p.paint(canvas, (left, y - ascent));
    }

    /// Draw `text` rotated 90° counter-clockwise, centered on `(cx, cy)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color) {
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        self.draw(canvas, text, 0.0, size * 0.35, Anchor::Center, size, color, false);
        canvas.restore();
    }
}
