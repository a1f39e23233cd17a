// File: crates/radar-core/src/color.rs
// Summary: CSS color string parsing into Skia colors.

use crate::error::{RadarError, Result};
use skia_safe as skia;

/// Parse a CSS color.
///
/// Supported forms:
/// - `#RGB`, `#RRGGBB`, `#RRGGBBAA`
/// - `rgb(r, g, b)` and `rgba(r, g, b, a)` with `a` in 0.0..=1.0
/// - `white`, `black`, `transparent`
pub fn parse_css_color(s: &str) -> Result<skia::Color> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix('#') {
        parse_hex(hex)
    } else if s.starts_with("rgba(") {
        parse_rgba(s)
    } else if s.starts_with("rgb(") {
        parse_rgb(s)
    } else {
        match s.to_ascii_lowercase().as_str() {
            "white" => Some(skia::Color::WHITE),
            "black" => Some(skia::Color::BLACK),
            "transparent" => Some(skia::Color::TRANSPARENT),
            _ => None,
        }
    };
    parsed.ok_or_else(|| RadarError::InvalidColor(s.to_string()))
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => {
            // #RGB expands each nibble: #bbb == #bbbbbb
            let nib = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok().map(|v| v * 17);
            Some(skia::Color::from_argb(255, nib(0)?, nib(1)?, nib(2)?))
        }
        6 => Some(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

fn parse_rgb(s: &str) -> Option<skia::Color> {
    let inner = s.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r: u8 = parts.next()?.parse().ok()?;
    let g: u8 = parts.next()?.parse().ok()?;
    let b: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(skia::Color::from_argb(255, r, g, b))
}

fn parse_rgba(s: &str) -> Option<skia::Color> {
    let inner = s.strip_prefix("rgba(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r: u8 = parts.next()?.parse().ok()?;
    let g: u8 = parts.next()?.parse().ok()?;
    let b: u8 = parts.next()?.parse().ok()?;
    let a: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(0.0..=1.0).contains(&a) {
        return None;
    }
    Some(skia::Color::from_argb(alpha_byte(a), r, g, b))
}

/// CSS alpha (0.0..=1.0) to an 8-bit channel, rounding to nearest.
pub fn alpha_byte(a: f64) -> u8 {
    (a.clamp(0.0, 1.0) * 255.0).round() as u8
}
