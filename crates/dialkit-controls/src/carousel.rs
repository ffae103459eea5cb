//! Carousel paging state and autoplay.
//!
//! Pages wrap in both directions. While a drag is in progress autoplay
//! ticks are skipped; while an autoplay transition is running drags are
//! ignored.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use dialkit_common::{ControlEvent, EventBus};
use dialkit_config::schema::CarouselConfig;
use tokio::sync::watch;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct CarouselState {
    len: usize,
    current: usize,
    dragging: bool,
    autoplay_animating: bool,
    drag_offset: f64,
    swipe_threshold: f64,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            dragging: false,
            autoplay_animating: false,
            drag_offset: 0.0,
            swipe_threshold: CarouselConfig::default().swipe_threshold,
        }
    }

    pub fn from_config(len: usize, config: &CarouselConfig) -> Self {
        Self {
            swipe_threshold: config.swipe_threshold,
            ..Self::new(len)
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Horizontal offset applied to every page while dragging.
    pub fn drag_offset(&self) -> f64 {
        self.drag_offset
    }

    /// Autoplay tick. Returns the new page, or `None` when skipped.
    pub fn advance(&mut self) -> Option<usize> {
        if self.dragging || self.len == 0 {
            return None;
        }
        self.autoplay_animating = true;
        self.current = (self.current + 1) % self.len;
        Some(self.current)
    }

    /// The autoplay transition has finished; drags are accepted again.
    pub fn finish_autoplay(&mut self) {
        self.autoplay_animating = false;
    }

    pub fn drag_changed(&mut self, translation: f64) {
        if self.autoplay_animating {
            return;
        }
        self.dragging = true;
        self.drag_offset = translation;
    }

    /// Settle a drag. A positive `translation` is a swipe to the right.
    ///
    /// Swipes longer than `page_width * swipe_threshold` change page.
    pub fn drag_ended(&mut self, translation: f64, page_width: f64) -> usize {
        if !self.dragging {
            return self.current;
        }
        let threshold = page_width * self.swipe_threshold;
        if self.len > 0 && translation.abs() > threshold {
            self.current = if translation > 0.0 {
                self.current.checked_sub(1).unwrap_or(self.len - 1)
            } else {
                (self.current + 1) % self.len
            };
        }
        self.drag_offset = 0.0;
        self.dragging = false;
        self.current
    }

    /// Signed distance in pages from the current page to page `id`.
    ///
    /// The first and last pages are neighbours, so the carousel reads as a loop.
    pub fn distance(&self, id: usize) -> f64 {
        if self.len > 1 {
            let last = self.len - 1;
            if self.current == 0 && id == last {
                return -1.0;
            }
            if id == 0 && self.current == last {
                return 1.0;
            }
        }
        id as f64 - self.current as f64
    }
}

/// Advance `state` every `period` until `shutdown` becomes `true`.
///
/// Each successful tick publishes [`ControlEvent::CarouselAdvanced`].
pub async fn run_autoplay(
    state: Arc<Mutex<CarouselState>>,
    period: Duration,
    bus: EventBus,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(period);
    // The first tick completes immediately; autoplay waits a full period.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let advanced = match state.lock() {
                    Ok(mut state) => state.advance(),
                    Err(e) => {
                        warn!("carousel state poisoned, stopping autoplay: {e}");
                        return;
                    }
                };
                if let Some(index) = advanced {
                    debug!(index, "carousel advanced");
                    bus.publish(ControlEvent::CarouselAdvanced(index));
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    return;
                }
            }
        }
    }
}
