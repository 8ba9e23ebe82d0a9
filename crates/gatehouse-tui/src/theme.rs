//! Theme resolution.
//!
//! Colors come from the `[theme]` config table as "#rrggbb" strings and
//! resolve to ratatui colors. Invalid values fall back per slot rather than
//! failing the whole theme.

use gatehouse_core::config::ThemeConfig;
use ratatui::style::Color;

const DEFAULT_PRIMARY: Color = Color::Rgb(0xff, 0x6d, 0x00);
const DEFAULT_ERROR: Color = Color::Rgb(0xff, 0x17, 0x44);
const DEFAULT_SUCCESS: Color = Color::Rgb(0x38, 0x8e, 0x3c);
const DEFAULT_BORDER: Color = Color::Rgb(0x9e, 0x9e, 0x9e);

/// Resolved theme colors for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Accent: card border, title, focused elements.
    pub primary: Color,
    /// Failing-field borders and inline error text.
    pub error: Color,
    /// Success banner text.
    pub success: Color,
    /// Unfocused field borders and helper text.
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY,
            error: DEFAULT_ERROR,
            success: DEFAULT_SUCCESS,
            border: DEFAULT_BORDER,
        }
    }
}

impl Theme {
    /// Resolves configured hex strings, falling back per slot.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            primary: parse_hex(&config.primary).unwrap_or(DEFAULT_PRIMARY),
            error: parse_hex(&config.error).unwrap_or(DEFAULT_ERROR),
            success: parse_hex(&config.success).unwrap_or(DEFAULT_SUCCESS),
            border: parse_hex(&config.border).unwrap_or(DEFAULT_BORDER),
        }
    }
}

/// Parses a "#rrggbb" hex string.
fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Well-formed hex strings resolve to RGB colors.
    #[test]
    fn test_parse_hex_valid() {
        assert_eq!(parse_hex("#ff6d00"), Some(Color::Rgb(0xff, 0x6d, 0x00)));
        assert_eq!(parse_hex("#000000"), Some(Color::Rgb(0, 0, 0)));
    }

    /// Missing '#', wrong length, or non-hex digits are rejected.
    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(parse_hex("ff6d00"), None);
        assert_eq!(parse_hex("#ff6d0"), None);
        assert_eq!(parse_hex("#ff6d0g"), None);
        assert_eq!(parse_hex(""), None);
    }

    /// A bad value falls back for its slot only.
    #[test]
    fn test_from_config_falls_back_per_slot() {
        let mut config = ThemeConfig::default();
        config.primary = "not-a-color".to_string();
        config.success = "#112233".to_string();

        let theme = Theme::from_config(&config);
        assert_eq!(theme.primary, DEFAULT_PRIMARY);
        assert_eq!(theme.success, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.error, DEFAULT_ERROR);
    }
}
