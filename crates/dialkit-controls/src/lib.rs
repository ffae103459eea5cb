//! State models for dialkit controls.
//!
//! Nothing here renders. Each model takes raw input (track positions,
//! swipe translations, search text) and returns the next state for the
//! caller to draw.

pub mod carousel;
pub mod debounce;
pub mod picker;
pub mod range_mapper;
pub mod slider;

pub use carousel::{run_autoplay, CarouselState};
pub use debounce::Debouncer;
pub use picker::{Picker, SearchablePicker};
pub use range_mapper::{
    extend_to_position, handle_offsets, percent_at_value, update_lower_bound, update_upper_bound,
    value_at_percent,
};
pub use slider::RangeSlider;
