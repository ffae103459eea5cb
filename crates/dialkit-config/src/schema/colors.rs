//! Control color palette.

use dialkit_common::Color;
use serde::{Deserialize, Serialize};

use crate::colors::parse_hex;

/// Hex color strings for the controls. Unparseable entries render white.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Accent used for the selected span of a range slider.
    pub tint: String,
    pub track: String,
    pub handle: String,
    /// Carousel page indicator dots.
    pub indicator: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            tint: "#FF2D55".into(),
            track: "#D1D1D6".into(),
            handle: "#FFFFFF".into(),
            indicator: "#FFFFFF".into(),
        }
    }
}

/// [`ColorConfig`] with every entry parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub tint: Color,
    pub track: Color,
    pub handle: Color,
    pub indicator: Color,
}

impl ColorConfig {
    pub fn palette(&self) -> Palette {
        Palette {
            tint: parse_hex(&self.tint),
            track: parse_hex(&self.track),
            handle: parse_hex(&self.handle),
            indicator: parse_hex(&self.indicator),
        }
    }
}
