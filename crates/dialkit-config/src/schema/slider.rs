//! Range slider configuration types.

use dialkit_common::{ControlError, NumericRange};
use serde::{Deserialize, Serialize};

/// Default bounds and geometry for range sliders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub lower: f64,
    /// Must be strictly greater than `lower`.
    pub upper: f64,
    /// Handle diameter in points (valid range: 4-64).
    pub handle_size: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
            handle_size: 20.0,
        }
    }
}

impl SliderConfig {
    pub fn bounds(&self) -> Result<NumericRange, ControlError> {
        NumericRange::new(self.lower, self.upper)
    }
}
