// File: crates/radar-core/src/theme.rs
// Summary: Color presets for the radar chart (neon default plus light/solarized/high-contrast).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Backdrop the host paints behind the chart; the chart itself clears to transparent.
    pub background: skia::Color,
    pub line: skia::Color,
    pub fill: skia::Color,
    pub grid: skia::Color,
    pub label: skia::Color,
}

impl Theme {
    /// Cyan on dark; these are the chart's built-in defaults.
    pub fn neon() -> Self {
        Self {
            name: "neon",
            background: skia::Color::from_argb(255, 18, 18, 20),
            line: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            fill: skia::Color::from_argb(51, 0x00, 0xff, 0xff),   // rgba(0,255,255,0.2)
            grid: skia::Color::from_argb(26, 0xff, 0xff, 0xff),   // rgba(255,255,255,0.1)
            label: skia::Color::from_argb(255, 0xbb, 0xbb, 0xbb),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            line: skia::Color::from_argb(255, 32, 120, 200),
            fill: skia::Color::from_argb(64, 32, 120, 200),
            grid: skia::Color::from_argb(255, 220, 220, 228),
            label: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            line: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),       // blue
            fill: skia::Color::from_argb(72, 0x26, 0x8b, 0xd2),
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            label: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),      // base1
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            line: skia::Color::from_argb(255, 0xcb, 0x4b, 0x16),       // orange
            fill: skia::Color::from_argb(64, 0xcb, 0x4b, 0x16),
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            label: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),      // base01
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            line: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            fill: skia::Color::from_argb(96, 0xff, 0xff, 0x00),
            grid: skia::Color::from_argb(255, 0x55, 0x55, 0x55),
            label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::neon(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to neon.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::neon)
}
