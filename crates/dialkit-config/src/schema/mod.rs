//! Configuration schema types for dialkit.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod carousel;
mod colors;
mod logging;
mod picker;
mod slider;

pub use carousel::*;
pub use colors::*;
pub use logging::*;
pub use picker::*;
pub use slider::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct DialkitConfig {
    pub colors: ColorConfig,
    pub slider: SliderConfig,
    pub carousel: CarouselConfig,
    pub picker: PickerConfig,
    pub logging: LoggingConfig,
}
