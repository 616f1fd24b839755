// File: crates/minichart-core/src/text.rs
// Summary: Label shaper/renderer using Skia textlayout, with canvas-style align/baseline anchoring.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle as SkTextStyle};

use crate::surface::{TextAlign, TextBaseline, TextStyle};

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

    fn make_style(size: f32, color: skia::Color) -> SkTextStyle {
        let mut ts = SkTextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["system-ui", "Segoe UI", "Roboto", "Inter", "Helvetica", "Arial", "DejaVu Sans", "sans-serif"]);
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

    /// Draw `text` so that `anchor` sits at the requested horizontal alignment and baseline,
    /// the way a 2-D canvas `fillText` positions it.
    pub fn draw_anchored(&self, canvas: &skia::Canvas, text: &str, anchor: (f32, f32), style: &TextStyle) {
        let paragraph = self.layout(text, style.size, style.color);
        let width = paragraph.longest_line();
        let x = match style.align {
            TextAlign::Left => anchor.0,
            TextAlign::Center => anchor.0 - width * 0.5,
            TextAlign::Right => anchor.0 - width,
        };
        // Paragraph paints from its top-left corner.
        let y = match style.baseline {
            TextBaseline::Top => anchor.1,
            TextBaseline::Middle => anchor.1 - paragraph.height() * 0.5,
            TextBaseline::Alphabetic => anchor.1 - paragraph.alphabetic_baseline(),
        };
        paragraph.paint(canvas, (x, y));
    }
}
