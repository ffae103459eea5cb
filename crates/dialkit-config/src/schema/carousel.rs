//! Carousel configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Autoplay period in milliseconds (valid range: 500-60000).
    pub autoplay_interval_ms: u64,
    /// Fraction of the page width a swipe must travel to change page (valid range: 0.1-0.9).
    pub swipe_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 3000,
            swipe_threshold: 0.5,
        }
    }
}

impl CarouselConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}
