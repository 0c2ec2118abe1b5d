//! CSS colour parsing for legend swatches.

use serde::Serialize;

/// An opaque sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// CSS Color Module Level 4 keywords (subset: basic colours plus every
// extended keyword a legend here may use).
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("aqua", Rgb::new(0, 255, 255)),
    ("black", Rgb::new(0, 0, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("brown", Rgb::new(165, 42, 42)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("fuchsia", Rgb::new(255, 0, 255)),
    ("gold", Rgb::new(255, 215, 0)),
    ("gray", Rgb::new(128, 128, 128)),
    ("green", Rgb::new(0, 128, 0)),
    ("grey", Rgb::new(128, 128, 128)),
    ("indigo", Rgb::new(75, 0, 130)),
    ("lime", Rgb::new(0, 255, 0)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("maroon", Rgb::new(128, 0, 0)),
    ("navy", Rgb::new(0, 0, 128)),
    ("olive", Rgb::new(128, 128, 0)),
    ("orange", Rgb::new(255, 165, 0)),
    ("pink", Rgb::new(255, 192, 203)),
    ("purple", Rgb::new(128, 0, 128)),
    ("red", Rgb::new(255, 0, 0)),
    ("silver", Rgb::new(192, 192, 192)),
    ("teal", Rgb::new(0, 128, 128)),
    ("violet", Rgb::new(238, 130, 238)),
    ("white", Rgb::new(255, 255, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
];

/// Parse a CSS colour keyword, `#rgb` or `#rrggbb`.
///
/// Returns `None` for anything else, including valid CSS this parser does not
/// know about (`rgb()`, `hsl()`, rarer keywords).
#[must_use]
pub fn parse_css_color(value: &str) -> Option<Rgb> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|(_, rgb)| *rgb)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let mut digits = hex.chars().filter_map(|c| c.to_digit(16));
            let mut channel = || digits.next().and_then(|d| u8::try_from(d * 17).ok());
            Some(Rgb::new(channel()?, channel()?, channel()?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_css_color("orange"), Some(Rgb::new(255, 165, 0)));
        assert_eq!(parse_css_color(" Gray "), Some(Rgb::new(128, 128, 128)));
        assert_eq!(parse_css_color("indigo"), Some(Rgb::new(75, 0, 130)));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_css_color("#ff8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(parse_css_color("#0f0"), Some(Rgb::new(0, 255, 0)));
        assert_eq!(parse_css_color("#FFF"), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_rejects_unknown() {
        assert_eq!(parse_css_color("rgb(1, 2, 3)"), None);
        assert_eq!(parse_css_color("#12345"), None);
        assert_eq!(parse_css_color("#gggggg"), None);
        assert_eq!(parse_css_color("notacolor"), None);
    }
}
