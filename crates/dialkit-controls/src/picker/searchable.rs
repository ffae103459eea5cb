use dialkit_common::{ControlEvent, EventBus};
use dialkit_config::schema::PickerConfig;
use tokio::sync::mpsc;

use super::Picker;
use crate::debounce::Debouncer;

/// A [`Picker`] with a search field whose edits are debounced.
///
/// Focusing the field opens the popover and blurring closes it. Debounced
/// queries come out of [`SearchablePicker::next_query`] and are also
/// published as [`ControlEvent::SearchSubmitted`].
pub struct SearchablePicker<T> {
    picker: Picker<T>,
    search_text: String,
    focused: bool,
    debouncer: Debouncer,
    queries: mpsc::Receiver<String>,
    bus: Option<EventBus>,
}

impl<T: Clone + PartialEq> SearchablePicker<T> {
    /// Must be called inside a tokio runtime; the debouncer runs as a task.
    pub fn new(items: Vec<T>, config: &PickerConfig) -> Self {
        let (debouncer, queries) = Debouncer::spawn(config.debounce());
        Self {
            picker: Picker::from_config(items, config),
            search_text: String::new(),
            focused: false,
            debouncer,
            queries,
            bus: None,
        }
    }

    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.picker = self.picker.with_event_bus(bus.clone());
        self.bus = Some(bus);
        self
    }

    pub fn picker(&self) -> &Picker<T> {
        &self.picker
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
        self.picker.set_open(focused);
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.debouncer.push(self.search_text.clone());
    }

    /// Pick an option; closes the popover and drops focus.
    pub fn select(&mut self, item: Option<T>) {
        self.picker.select(item);
        self.focused = false;
    }

    /// Wait for the next debounced query.
    pub async fn next_query(&mut self) -> Option<String> {
        let query = self.queries.recv().await?;
        if let Some(bus) = &self.bus {
            bus.publish(ControlEvent::SearchSubmitted(query.clone()));
        }
        Some(query)
    }

    /// Items whose label contains the search text, ignoring case.
    pub fn filter<F>(&self, label: F) -> Vec<&T>
    where
        F: Fn(&T) -> String,
    {
        let query = self.search_text.trim().to_lowercase();
        self.picker
            .items()
            .iter()
            .filter(|item| query.is_empty() || label(*item).to_lowercase().contains(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config() -> PickerConfig {
        PickerConfig {
            debounce_ms: 1000,
            ..PickerConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn focus_opens_and_closes_popover() {
        let mut p = SearchablePicker::new(vec![1, 2, 3], &config());
        p.set_focus(true);
        assert!(p.picker().is_open());
        p.set_focus(false);
        assert!(!p.picker().is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn popover_height_follows_config() {
        let custom = PickerConfig {
            max_popover_height: 320.0,
            ..config()
        };
        let p = SearchablePicker::new(vec![1, 2, 3], &custom);
        assert_eq!(p.picker().max_popover_height(), 320.0);
    }

    #[tokio::test(start_paused = true)]
    async fn select_drops_focus() {
        let mut p = SearchablePicker::new(vec![1, 2, 3], &config());
        p.set_focus(true);
        p.select(Some(3));
        assert!(!p.is_focused());
        assert!(!p.picker().is_open());
        assert_eq!(p.picker().selection(), Some(&3));
    }

    #[tokio::test(start_paused = true)]
    async fn typing_is_debounced() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let mut p = SearchablePicker::new(vec!["alpha", "beta"], &config()).with_event_bus(bus);

        p.set_search_text("a");
        tokio::time::sleep(Duration::from_millis(200)).await;
        p.set_search_text("al");
        p.set_search_text("alp");

        assert_eq!(p.next_query().await.as_deref(), Some("alp"));
        assert_eq!(
            rx.recv().await.unwrap(),
            ControlEvent::SearchSubmitted("alp".into())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn filter_matches_case_insensitively() {
        let mut p = SearchablePicker::new(vec!["Apple", "banana", "Grape"], &config());
        assert_eq!(p.filter(|s| s.to_string()).len(), 3);

        p.set_search_text("AP");
        assert_eq!(p.filter(|s| s.to_string()), vec![&"Apple", &"Grape"]);

        p.set_search_text("kiwi");
        assert!(p.filter(|s| s.to_string()).is_empty());
    }
}
