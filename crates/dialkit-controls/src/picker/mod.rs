//! Dropdown picker state.
//!
//! A picker shows its items in a popover. The first option is always the
//! empty selection (`None`); choosing any option closes the popover.

mod searchable;

pub use searchable::SearchablePicker;

use dialkit_common::{ControlEvent, EventBus};
use dialkit_config::schema::PickerConfig;

#[derive(Clone)]
pub struct Picker<T> {
    items: Vec<T>,
    selection: Option<T>,
    popover_open: bool,
    max_popover_height: f64,
    bus: Option<EventBus>,
}

impl<T: Clone + PartialEq> Picker<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            selection: None,
            popover_open: false,
            max_popover_height: PickerConfig::default().max_popover_height,
            bus: None,
        }
    }

    pub fn from_config(items: Vec<T>, config: &PickerConfig) -> Self {
        Self {
            max_popover_height: config.max_popover_height,
            ..Self::new(items)
        }
    }

    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn selection(&self) -> Option<&T> {
        self.selection.as_ref()
    }

    /// Height cap for the popover; taller option lists scroll.
    pub fn max_popover_height(&self) -> f64 {
        self.max_popover_height
    }

    pub fn is_open(&self) -> bool {
        self.popover_open
    }

    pub fn toggle(&mut self) {
        self.popover_open = !self.popover_open;
    }

    pub fn set_open(&mut self, open: bool) {
        self.popover_open = open;
    }

    /// The rows of the popover: the empty entry, then every item.
    pub fn options(&self) -> impl Iterator<Item = Option<&T>> {
        std::iter::once(None).chain(self.items.iter().map(Some))
    }

    /// Store `item` as the selection and close the popover.
    pub fn select(&mut self, item: Option<T>) {
        let index = item
            .as_ref()
            .and_then(|item| self.items.iter().position(|candidate| candidate == item));
        self.selection = item;
        self.popover_open = false;
        if let Some(bus) = &self.bus {
            bus.publish(ControlEvent::SelectionChanged(index));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_picker_is_closed_and_empty() {
        let p = Picker::new(vec![1, 2, 3]);
        assert!(!p.is_open());
        assert_eq!(p.selection(), None);
        assert_eq!(p.items(), &[1, 2, 3]);
    }

    #[test]
    fn popover_height_comes_from_config() {
        assert_eq!(Picker::new(vec![1]).max_popover_height(), 400.0);

        let config = PickerConfig {
            max_popover_height: 250.0,
            ..PickerConfig::default()
        };
        let p = Picker::from_config(vec![1, 2], &config);
        assert_eq!(p.max_popover_height(), 250.0);
        assert_eq!(p.items(), &[1, 2]);
    }

    #[test]
    fn toggle_flips_popover() {
        let mut p = Picker::new(vec!["a"]);
        p.toggle();
        assert!(p.is_open());
        p.toggle();
        assert!(!p.is_open());
    }

    #[test]
    fn options_lead_with_empty_entry() {
        let p = Picker::new(vec![1, 2]);
        let options: Vec<_> = p.options().collect();
        assert_eq!(options, vec![None, Some(&1), Some(&2)]);
    }

    #[test]
    fn select_stores_and_closes() {
        let mut p = Picker::new(vec![1, 2, 3]);
        p.set_open(true);
        p.select(Some(2));
        assert_eq!(p.selection(), Some(&2));
        assert!(!p.is_open());

        p.set_open(true);
        p.select(None);
        assert_eq!(p.selection(), None);
        assert!(!p.is_open());
    }

    #[tokio::test]
    async fn select_publishes_index() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let mut p = Picker::new(vec!["x", "y", "z"]).with_event_bus(bus);

        p.select(Some("z"));
        p.select(None);

        assert_eq!(rx.recv().await.unwrap(), ControlEvent::SelectionChanged(Some(2)));
        assert_eq!(rx.recv().await.unwrap(), ControlEvent::SelectionChanged(None));
    }
}
