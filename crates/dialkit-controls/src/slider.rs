//! Range slider state.
//!
//! [`RangeSlider`] owns the bounds and current selection and applies the
//! mapping functions from [`crate::range_mapper`] to raw track positions.
//! The caller reads the selection back after each update; changes are also
//! published on an optional [`EventBus`].

use dialkit_common::{ControlError, ControlEvent, EventBus, NumericRange, SelectedRange};
use dialkit_config::schema::SliderConfig;
use tracing::trace;

use crate::range_mapper::{
    extend_to_position, handle_offsets, update_lower_bound, update_upper_bound,
};

#[derive(Clone)]
pub struct RangeSlider {
    bounds: NumericRange,
    selection: SelectedRange,
    handle_size: f64,
    bus: Option<EventBus>,
}

impl RangeSlider {
    /// A slider over `bounds` with the whole range selected.
    pub fn new(bounds: NumericRange) -> Self {
        Self {
            bounds,
            selection: SelectedRange::full(&bounds),
            handle_size: SliderConfig::default().handle_size,
            bus: None,
        }
    }

    pub fn from_config(config: &SliderConfig) -> Result<Self, ControlError> {
        let mut slider = Self::new(config.bounds()?);
        slider.handle_size = config.handle_size;
        Ok(slider)
    }

    /// Start from `selection`, which must lie inside the bounds.
    pub fn with_selection(mut self, selection: SelectedRange) -> Result<Self, ControlError> {
        self.selection = SelectedRange::within(&self.bounds, selection.lower(), selection.upper())?;
        Ok(self)
    }

    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn bounds(&self) -> NumericRange {
        self.bounds
    }

    pub fn selection(&self) -> SelectedRange {
        self.selection
    }

    pub fn handle_size(&self) -> f64 {
        self.handle_size
    }

    /// Lower handle dragged to `position` on a track `track_width` wide.
    pub fn drag_lower(
        &mut self,
        position: f64,
        track_width: f64,
    ) -> Result<SelectedRange, ControlError> {
        let next = update_lower_bound(&self.selection, &self.bounds, position, track_width)?;
        self.apply(next);
        self.publish(ControlEvent::EditingChanged(true));
        Ok(self.selection)
    }

    /// Upper handle dragged to `position` on a track `track_width` wide.
    pub fn drag_upper(
        &mut self,
        position: f64,
        track_width: f64,
    ) -> Result<SelectedRange, ControlError> {
        let next = update_upper_bound(&self.selection, &self.bounds, position, track_width)?;
        self.apply(next);
        self.publish(ControlEvent::EditingChanged(true));
        Ok(self.selection)
    }

    /// Tap on the track outside the handles.
    pub fn tap(&mut self, position: f64, track_width: f64) -> Result<SelectedRange, ControlError> {
        let next = extend_to_position(&self.selection, &self.bounds, position, track_width)?;
        self.apply(next);
        Ok(self.selection)
    }

    pub fn end_drag(&self) {
        self.publish(ControlEvent::EditingChanged(false));
    }

    /// Pixel offsets of the handle centers.
    pub fn handle_offsets(&self, track_width: f64) -> Result<(f64, f64), ControlError> {
        handle_offsets(&self.selection, &self.bounds, track_width)
    }

    fn apply(&mut self, next: SelectedRange) {
        if next == self.selection {
            return;
        }
        trace!(lower = next.lower(), upper = next.upper(), "range selection changed");
        self.selection = next;
        self.publish(ControlEvent::RangeChanged {
            lower: next.lower(),
            upper: next.upper(),
        });
    }

    fn publish(&self, event: ControlEvent) {
        if let Some(bus) = &self.bus {
            bus.publish(event);
        }
    }
}
