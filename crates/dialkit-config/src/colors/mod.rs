//! Hex color parsing and validation.
//!
//! Accepts `RGB`, `RGBA`, `RRGGBB` and `RRGGBBAA`, each optionally prefixed
//! with `#` and surrounded by whitespace. Single-digit channels scale by
//! `/ 15` (no digit duplication), two-digit channels by `/ 255`. Channels are
//! always read left to right: red, green, blue, then alpha when present.

mod parse;


use dialkit_common::types::Color;
use tracing::debug;

use parse::{parse_digits, strip, HEX_RE};

/// Parse a hex color string, falling back to opaque white.
///
/// Never fails: empty strings, unsupported lengths (1, 2, 5, 7, more than 8
/// digits) and non-hex characters all produce [`Color::WHITE`].
pub fn parse_hex(input: &str) -> Color {
    match try_parse_hex(input) {
        Some(color) => color,
        None => {
            debug!("unparseable hex color {input:?}, using white");
            Color::WHITE
        }
    }
}

/// Parse a hex color string, returning `None` where [`parse_hex`] would fall back.
pub fn try_parse_hex(input: &str) -> Option<Color> {
    parse_digits(strip(input))
}

/// Validate that a string is a hex color [`try_parse_hex`] accepts.
pub fn validate_hex(input: &str) -> bool {
    HEX_RE.is_match(input.trim())
}
