// File: crates/lapviz-render-skia/src/text.rs
// Summary: Text shaper/renderer on Skia textlayout; anchors labels at a baseline with left/center/right alignment.

use lapviz_core::surface::{TextAlign, TextStyle};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle};
use skia_safe as skia;

use crate::raster::to_skia;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(style: &TextStyle) -> skia::textlayout::TextStyle {
        let mut ts = skia::textlayout::TextStyle::new();
        ts.set_font_size(style.size.max(1.0));
        ts.set_color(to_skia(style.color));
        ts.set_font_families(style.families);
        if style.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, style: &TextStyle) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(style));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, style: &TextStyle) -> f32 {
        self.layout(text, style).longest_line()
    }

    /// Paint `text` with its baseline at `y`; `x` is the left edge, center or right edge
    /// depending on `style.align`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &TextStyle) {
        let mut paragraph = self.layout(text, style);
        let width = paragraph.longest_line();
        let left = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x - width * 0.5,
            TextAlign::Right => x - width,
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        paragraph.paint(canvas, (left, y - style.size * 0.8));
    }
}
