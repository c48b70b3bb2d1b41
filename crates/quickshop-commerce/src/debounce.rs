//! Trailing-edge debouncing of a changing value.

use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Default delay for search input.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(300);

/// Propagates a value only after it has stopped changing for `delay`.
///
/// Every [`set`](Debouncer::set) is accepted at once and restarts the
/// timer; the applied value lags behind until the input goes quiet. A
/// background task owns the timer, so this must be created inside a Tokio
/// runtime. Dropping the debouncer cancels any pending value.
#[derive(Debug)]
pub struct Debouncer<T> {
    input: T,
    delay: Duration,
    inputs: mpsc::UnboundedSender<T>,
    applied: watch::Receiver<T>,
    timer: JoinHandle<()>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a debouncer whose applied value starts at `initial`.
    pub fn new(initial: T, delay: Duration) -> Self {
        let (inputs, input_rx) = mpsc::unbounded_channel();
        let (applied_tx, applied) = watch::channel(initial.clone());
        let timer = tokio::spawn(run_timer(delay, input_rx, applied_tx));

        Self {
            input: initial,
            delay,
            inputs,
            applied,
            timer,
        }
    }

    /// Accept a new value and restart the quiet window.
    pub fn set(&mut self, value: T) {
        self.input = value.clone();
        let _ = self.inputs.send(value);
    }

    /// The latest accepted value, applied or not.
    pub fn input(&self) -> &T {
        &self.input
    }

    /// The value that has made it through the quiet window.
    pub fn applied(&self) -> T {
        self.applied.borrow().clone()
    }

    /// Wait until a new value is applied.
    ///
    /// Returns `false` if the timer task is gone and nothing more will be
    /// applied.
    pub async fn changed(&mut self) -> bool {
        self.applied.changed().await.is_ok()
    }

    /// The quiet window.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.timer.abort();
    }
}

async fn run_timer<T>(
    delay: Duration,
    mut inputs: mpsc::UnboundedReceiver<T>,
    applied: watch::Sender<T>,
) {
    while let Some(mut pending) = inputs.recv().await {
        loop {
            tokio::select! {
                next = inputs.recv() => match next {
                    Some(value) => pending = value,
                    None => return,
                },
                _ = tokio::time::sleep(delay) => {
                    let _ = applied.send(pending);
                    break;
                }
            }
        }
    }
}
