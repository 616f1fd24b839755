// File: crates/minichart-core/src/color.rs
// Summary: CSS color parsing and deterministic fallback colors for slices/series.

use skia_safe as skia;

/// Saturation (percent) of generated fallback colors.
const FALLBACK_SATURATION: f32 = 70.0;
/// Lightness (percent) of generated fallback colors.
const FALLBACK_LIGHTNESS: f32 = 55.0;

/// Fallback color for item `index` out of `count`: hue `index × 360 / count`.
/// Pure function of its inputs, so repeated renders color identically.
pub fn fallback_color(index: usize, count: usize) -> skia::Color {
    let hue = (index as f32) * 360.0 / (count.max(1) as f32);
    hsl(hue, FALLBACK_SATURATION, FALLBACK_LIGHTNESS, 1.0)
}

/// Explicit color if it parses, else the fallback for (`index`, `count`).
pub fn resolve(explicit: Option<&str>, index: usize, count: usize) -> skia::Color {
    explicit
        .and_then(parse_css_color)
        .unwrap_or_else(|| fallback_color(index, count))
}

/// HSL (hue in degrees, saturation/lightness in percent) plus alpha fraction.
pub fn hsl(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> skia::Color {
    let h = hue.rem_euclid(360.0);
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;
    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    skia::Color::from_argb(unit_to_u8(alpha), unit_to_u8(r + m), unit_to_u8(g + m), unit_to_u8(b + m))
}

/// Parse the CSS color forms dashboards actually emit: hex, rgb(a), hsl(a),
/// `transparent` and a handful of names. Returns `None` for anything else.
pub fn parse_css_color(input: &str) -> Option<skia::Color> {
    let s = input.trim().to_ascii_lowercase();
    if s.is_empty() {
        return None;
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(args) = function_args(&s, &["rgba", "rgb"]) {
        return parse_rgb(&args);
    }
    if let Some(args) = function_args(&s, &["hsla", "hsl"]) {
        return parse_hsl(&args);
    }
    named(&s)
}

fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(skia::Color::from_argb(255, nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(skia::Color::from_argb(nibble(3)?, nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

/// Split `name(a, b, c / d)` into its argument tokens.
fn function_args(s: &str, names: &[&str]) -> Option<Vec<String>> {
    let name = names.iter().find(|n| s.starts_with(**n))?;
    let rest = s[name.len()..].trim_start();
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    let args = inner
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect::<Vec<_>>();
    Some(args)
}

/// Number or percentage; percentages are returned scaled to `percent_scale`.
fn component(token: &str, percent_scale: f32) -> Option<f32> {
    if let Some(p) = token.strip_suffix('%') {
        let v = p.parse::<f32>().ok()?;
        return v.is_finite().then_some(v / 100.0 * percent_scale);
    }
    let v = token.parse::<f32>().ok()?;
    v.is_finite().then_some(v)
}

fn alpha(args: &[String], at: usize) -> Option<f32> {
    match args.get(at) {
        Some(t) => component(t, 1.0),
        None => Some(1.0),
    }
}

fn parse_rgb(args: &[String]) -> Option<skia::Color> {
    if args.len() < 3 || args.len() > 4 {
        return None;
    }
    let ch = |i: usize| component(&args[i], 255.0).map(|v| v.clamp(0.0, 255.0).round() as u8);
    Some(skia::Color::from_argb(unit_to_u8(alpha(args, 3)?), ch(0)?, ch(1)?, ch(2)?))
}

fn parse_hsl(args: &[String]) -> Option<skia::Color> {
    if args.len() < 3 || args.len() > 4 {
        return None;
    }
    let hue = args[0].trim_end_matches("deg").parse::<f32>().ok().filter(|h| h.is_finite())?;
    let sat = component(&args[1], 100.0)?;
    let light = component(&args[2], 100.0)?;
    Some(hsl(hue, sat, light, alpha(args, 3)?))
}

fn named(s: &str) -> Option<skia::Color> {
    let (r, g, b) = match s {
        "transparent" => return Some(skia::Color::TRANSPARENT),
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "orange" => (255, 165, 0),
        "yellow" => (255, 255, 0),
        "purple" => (128, 0, 128),
        "teal" => (0, 128, 128),
        "navy" => (0, 0, 128),
        _ => return None,
    };
    Some(skia::Color::from_argb(255, r, g, b))
}
