//! Internal hex parsing helpers.
//!
//! Splits a validated digit string into channels. Not part of the public API.

use dialkit_common::types::Color;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for a hex color: optional `#`, then 3, 4, 6 or 8 hex digits.
pub(crate) static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// Strip surrounding whitespace and one leading `#`.
pub(super) fn strip(input: &str) -> &str {
    let s = input.trim();
    s.strip_prefix('#').unwrap_or(s)
}

/// Decode a digit string of length 3, 4, 6 or 8.
///
/// Returns `None` for any other length or for non-hex characters.
pub(super) fn parse_digits(hex: &str) -> Option<Color> {
    // from_str_radix accepts a leading '+', so check the alphabet up front.
    // This also guarantees the byte slicing below lands on char boundaries.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let [r, g, b] = nibbles::<3>(hex)?;
            Some(Color::from_rgba(r, g, b, 1.0))
        }
        4 => {
            let [r, g, b, a] = nibbles::<4>(hex)?;
            Some(Color::from_rgba(r, g, b, a))
        }
        6 => {
            let [r, g, b] = bytes::<3>(hex)?;
            Some(Color::from_rgba(r, g, b, 1.0))
        }
        8 => {
            let [r, g, b, a] = bytes::<4>(hex)?;
            Some(Color::from_rgba(r, g, b, a))
        }
        _ => None,
    }
}

/// One digit per channel, scaled by `/ 15`.
fn nibbles<const N: usize>(hex: &str) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    for (i, slot) in out.iter_mut().enumerate() {
        let digit = u8::from_str_radix(&hex[i..i + 1], 16).ok()?;
        *slot = f64::from(digit) / 15.0;
    }
    Some(out)
}

/// Two digits per channel, scaled by `/ 255`.
fn bytes<const N: usize>(hex: &str) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    for (i, slot) in out.iter_mut().enumerate() {
        let byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
        *slot = f64::from(byte) / 255.0;
    }
    Some(out)
}
