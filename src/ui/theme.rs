use crate::engine::config::ThemeConfig;
use ratatui::style::Color;

/// Midnight theme colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub selected: Color,
    pub anchor: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            background: parse_hex_color(&config.background_color),
            text: parse_hex_color(&config.text_color),
            selected: parse_hex_color(&config.selected_color),
            anchor: parse_hex_color(&config.anchor_color),
            dimmed: parse_hex_color(&config.dimmed_color),
        }
    }
}

/// Parses `#RRGGBB`; anything else falls back to the terminal default.
pub fn parse_hex_color(hex: &str) -> Color {
    let digits = match hex.strip_prefix('#') {
        Some(d) if d.len() == 6 && d.is_ascii() => d,
        _ => return Color::Reset,
    };
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Reset,
    }
}
