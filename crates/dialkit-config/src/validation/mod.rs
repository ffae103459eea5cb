//! Full configuration validation.
//!
//! Checks color strings, slider bounds and numeric ranges, collecting
//! every problem into a single `ConfigError`.

mod helpers;


use crate::colors::validate_hex;
use crate::schema::DialkitConfig;
use dialkit_common::ConfigError;

use helpers::{validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DialkitConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_colors(&mut errors, config);
    validate_slider(&mut errors, config);
    validate_carousel(&mut errors, config);
    validate_picker(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_colors(errors: &mut Vec<String>, config: &DialkitConfig) {
    let colors = &config.colors;
    for (name, value) in [
        ("colors.tint", &colors.tint),
        ("colors.track", &colors.track),
        ("colors.handle", &colors.handle),
        ("colors.indicator", &colors.indicator),
    ] {
        if !validate_hex(value) {
            errors.push(format!("{name} = {value:?} is not a hex color"));
        }
    }
}

fn validate_slider(errors: &mut Vec<String>, config: &DialkitConfig) {
    let slider = &config.slider;
    if !slider.lower.is_finite() || !slider.upper.is_finite() {
        errors.push(format!(
            "slider bounds must be finite, got [{}, {}]",
            slider.lower, slider.upper
        ));
    } else if slider.upper <= slider.lower {
        errors.push(format!(
            "slider.upper = {} must be greater than slider.lower = {}",
            slider.upper, slider.lower
        ));
    }
    validate_range_f64(errors, "slider.handle_size", slider.handle_size, 4.0, 64.0);
}

fn validate_carousel(errors: &mut Vec<String>, config: &DialkitConfig) {
    validate_range(
        errors,
        "carousel.autoplay_interval_ms",
        config.carousel.autoplay_interval_ms,
        500,
        60_000,
    );
    validate_range_f64(
        errors,
        "carousel.swipe_threshold",
        config.carousel.swipe_threshold,
        0.1,
        0.9,
    );
}

fn validate_picker(errors: &mut Vec<String>, config: &DialkitConfig) {
    validate_range(errors, "picker.debounce_ms", config.picker.debounce_ms, 0, 10_000);
    let height = config.picker.max_popover_height;
    if !(height.is_finite() && height > 0.0) {
        errors.push(format!("picker.max_popover_height = {height} must be positive"));
    }
}
