//! Change notification and live-query streams shared by store adapters.

use futures::stream::{self, BoxStream, StreamExt};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Publishes a version bump after every write that changed the table.
///
/// Subscribers only learn that something changed; they re-run their query to
/// see what. Bursts of writes between two polls collapse into one wake-up.
#[derive(Debug)]
pub struct ChangeNotifier {
    version: watch::Sender<u64>,
}

impl ChangeNotifier {
    /// Creates a notifier at version zero.
    #[must_use]
    pub fn new() -> Self {
        let (version, _) = watch::channel(0);
        Self { version }
    }

    /// Signals that the table changed.
    pub fn notify(&self) {
        self.version.send_modify(|version| *version = version.wrapping_add(1));
    }

    /// Returns the number of changes published so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

struct LiveQueryState<F> {
    _notifier: Arc<ChangeNotifier>,
    changes: watch::Receiver<u64>,
    fetch: F,
    primed: bool,
    finished: bool,
}

/// Builds a stream that runs `fetch` now and again after every change.
///
/// The stream holds its own handle on `notifier`, so it stays open for as
/// long as the caller keeps polling it. The first failed fetch is yielded
/// and then the stream ends.
pub fn live_query<F, Fut, T, E>(
    notifier: Arc<ChangeNotifier>,
    fetch: F,
) -> BoxStream<'static, Result<T, E>>
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let changes = notifier.subscribe();
    let initial = LiveQueryState {
        _notifier: notifier,
        changes,
        fetch,
        primed: false,
        finished: false,
    };

    stream::unfold(initial, |mut state| async move {
        if state.finished {
            return None;
        }
        if state.primed && state.changes.changed().await.is_err() {
            return None;
        }
        state.primed = true;
        // Writes landing during the fetch below must wake the next poll.
        state.changes.mark_unchanged();
        let result = (state.fetch)().await;
        state.finished = result.is_err();
        Some((result, state))
    })
    .boxed()
}
