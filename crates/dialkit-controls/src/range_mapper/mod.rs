//! Position/value mapping for dual-handle range sliders.
//!
//! A *percent* is a position along the track as a fraction of its width.
//! Drag positions are clamped to the track before mapping, and the handles
//! are ordered after mapping, so the update functions never produce a
//! selection with `lower > upper`.


use dialkit_common::{ControlError, NumericRange, SelectedRange};

/// The value at `percent` of the way through `bounds`. `percent` is not clamped.
pub fn value_at_percent(bounds: &NumericRange, percent: f64) -> f64 {
    bounds.lower() + percent * bounds.width()
}

/// Where `value` sits within `bounds`, as a fraction of its width.
///
/// Fails with `InvalidArgument` when `bounds` has zero width.
pub fn percent_at_value(bounds: &NumericRange, value: f64) -> Result<f64, ControlError> {
    let width = bounds.width();
    if width == 0.0 {
        return Err(ControlError::InvalidArgument(format!(
            "bounds [{}, {}] have zero width",
            bounds.lower(),
            bounds.upper()
        )));
    }
    Ok((value - bounds.lower()) / width)
}

/// Move the lower handle to `raw_position` pixels along a track `track_width` wide.
///
/// Positions left of the track clamp to 0; the lower handle stops at the upper one.
pub fn update_lower_bound(
    current: &SelectedRange,
    bounds: &NumericRange,
    raw_position: f64,
    track_width: f64,
) -> Result<SelectedRange, ControlError> {
    check_track_width(track_width)?;
    let percent = raw_position.max(0.0) / track_width;
    let candidate = value_at_percent(bounds, percent);
    Ok(current.with_lower(candidate))
}

/// Move the upper handle to `raw_position` pixels along a track `track_width` wide.
///
/// Positions right of the track clamp to its end; the upper handle stops at the lower one.
pub fn update_upper_bound(
    current: &SelectedRange,
    bounds: &NumericRange,
    raw_position: f64,
    track_width: f64,
) -> Result<SelectedRange, ControlError> {
    check_track_width(track_width)?;
    let percent = raw_position.min(track_width) / track_width;
    let candidate = value_at_percent(bounds, percent);
    Ok(current.with_upper(candidate))
}

/// Widen the selection so it includes the value under a tap on the track.
pub fn extend_to_position(
    current: &SelectedRange,
    bounds: &NumericRange,
    raw_position: f64,
    track_width: f64,
) -> Result<SelectedRange, ControlError> {
    check_track_width(track_width)?;
    let percent = raw_position.clamp(0.0, track_width) / track_width;
    let value = value_at_percent(bounds, percent);
    Ok(current.with_lower(current.lower().min(value)).with_upper(current.upper().max(value)))
}

/// Pixel offsets of the lower and upper handles along the track.
pub fn handle_offsets(
    selection: &SelectedRange,
    bounds: &NumericRange,
    track_width: f64,
) -> Result<(f64, f64), ControlError> {
    Ok((
        track_width * percent_at_value(bounds, selection.lower())?,
        track_width * percent_at_value(bounds, selection.upper())?,
    ))
}

fn check_track_width(track_width: f64) -> Result<(), ControlError> {
    if track_width.is_finite() && track_width > 0.0 {
        Ok(())
    } else {
        Err(ControlError::InvalidArgument(format!(
            "track width must be positive, got {track_width}"
        )))
    }
}
