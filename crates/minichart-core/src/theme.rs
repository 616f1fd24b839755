// File: crates/minichart-core/src/theme.rs
// Summary: Light/Dark theming for axis, gridline, label and default series colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub axis_line: skia::Color,
    pub grid: skia::Color,
    /// Muted text: tick labels, category labels and the empty-state label.
    pub muted_text: skia::Color,
    /// Line series stroke when the dataset has no border color.
    pub line_stroke: skia::Color,
    pub placeholder_size: f32,
    pub tick_label_size: f32,
    pub category_label_size: f32,
}

impl Theme {
    /// Dashboard defaults: translucent black rules, Bootstrap secondary text.
    pub fn light() -> Self {
        Self {
            name: "light",
            axis_line: skia::Color::from_argb(38, 0, 0, 0),
            grid: skia::Color::from_argb(15, 0, 0, 0),
            muted_text: skia::Color::from_argb(255, 0x6c, 0x75, 0x7d),
            line_stroke: skia::Color::from_argb(217, 13, 110, 253),
            placeholder_size: 13.0,
            tick_label_size: 11.0,
            category_label_size: 10.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            muted_text: skia::Color::from_argb(255, 150, 150, 160),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            placeholder_size: 13.0,
            tick_label_size: 11.0,
            category_label_size: 10.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
