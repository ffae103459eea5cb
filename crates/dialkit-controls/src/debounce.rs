//! Trailing-edge debouncer for text input.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::debug;

/// Handle for pushing values into a debounce task.
///
/// Every [`Debouncer::push`] restarts the quiet period; only the last value
/// of a burst comes out of the receiver returned by [`Debouncer::spawn`].
/// Dropping the handle flushes any pending value and ends the task.
#[derive(Debug)]
pub struct Debouncer {
    input: mpsc::UnboundedSender<String>,
}

impl Debouncer {
    /// Spawn the debounce task on the current tokio runtime.
    pub fn spawn(delay: Duration) -> (Self, mpsc::Receiver<String>) {
        let (input, input_rx) = mpsc::unbounded_channel();
        let (output_tx, output) = mpsc::channel(16);
        tokio::spawn(run(delay, input_rx, output_tx));
        (Self { input }, output)
    }

    /// Returns `false` once the output receiver has been dropped.
    pub fn push(&self, value: impl Into<String>) -> bool {
        self.input.send(value.into()).is_ok()
    }
}

async fn run(
    delay: Duration,
    mut input: mpsc::UnboundedReceiver<String>,
    output: mpsc::Sender<String>,
) {
    while let Some(first) = input.recv().await {
        let mut pending = first;
        let deadline = tokio::time::sleep(delay);
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                _ = &mut deadline => break,
                next = input.recv() => match next {
                    Some(value) => {
                        pending = value;
                        deadline.as_mut().reset(Instant::now() + delay);
                    }
                    None => break,
                },
            }
        }

        debug!(value = %pending, "debounced value ready");
        if output.send(pending).await.is_err() {
            return;
        }
    }
}
