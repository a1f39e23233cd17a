// File: crates/radar-core/src/text.rs
// Summary: Label text shaping and anchored drawing using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::types::TextAlign;

/// Families tried in order for label text.
const LABEL_FAMILIES: &[&str] = &["Segoe UI", "Tahoma", "Geneva", "Verdana", "sans-serif"];

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

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(LABEL_FAMILIES);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its horizontal anchor at `x` per `align` and its
    /// vertical middle at `y`.
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        align: TextAlign,
    ) {
        if text.is_empty() {
            return;
        }
        let paragraph = self.layout(text, size, color);
        let width = paragraph.longest_line();
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - width * 0.5,
            TextAlign::Right => x - width,
        };
        // Paragraph paints from its top-left corner
        let top = y - paragraph.height() * 0.5;
        paragraph.paint(canvas, (left, top));
    }
}
