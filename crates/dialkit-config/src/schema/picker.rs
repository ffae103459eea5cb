//! Picker configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Quiet period before a search query is delivered (valid range: 0-10000 ms).
    pub debounce_ms: u64,
    pub max_popover_height: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1000,
            max_popover_height: 400.0,
        }
    }
}

impl PickerConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
