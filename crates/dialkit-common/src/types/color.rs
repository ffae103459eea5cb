use serde::{Deserialize, Serialize};

/// An RGBA color with every channel normalized to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Opaque white, the fallback for unparseable color strings.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channels, scaling each by `/ 255`.
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: f64::from(a) / 255.0,
        }
    }

    /// Channels rounded to the nearest byte, in `[r, g, b, a]` order.
    pub fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Render as upper-case `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_bytes();
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
