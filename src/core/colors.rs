//! Terminal colors for indicator glyphs.
//!
//! Colors are configured by name per category (`"yellow"`, `"bright red"`, ...) and
//! resolved through `colored`. Names are checked with [`parse_color`] when the
//! configuration is loaded, so painting never meets an unknown name.

use colored::{Color, ColoredString, Colorize};

/// Parse a terminal color name, `None` when `colored` does not know it
pub fn parse_color(name: &str) -> Option<Color> {
    name.parse::<Color>().ok()
}

/// Apply an optional configured color to `text`
pub fn paint(text: &str, color: Option<&str>) -> ColoredString {
    match color.and_then(parse_color) {
        Some(color) => text.color(color),
        None => text.normal(),
    }
}
