use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Notifications emitted by control models as their state changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ControlEvent {
    /// A handle drag started/continued (`true`) or ended (`false`).
    EditingChanged(bool),
    RangeChanged {
        lower: f64,
        upper: f64,
    },
    /// Index into the picker's items, `None` for the empty entry.
    SelectionChanged(Option<usize>),
    SearchSubmitted(String),
    CarouselAdvanced(usize),
    #[serde(other)]
    Unknown,
}

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ControlEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ControlEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ControlEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
