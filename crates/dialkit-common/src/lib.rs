pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, ControlError, DialkitError};
pub use events::{ControlEvent, EventBus};
pub use types::{Color, NumericRange, SelectedRange};
