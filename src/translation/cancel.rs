//! Cooperative cancellation for in-flight translation requests.
//!
//! The orchestrator suspends at exactly one point, the remote backend
//! call, and races it against the signal. Callers hold the handle;
//! firing it aborts the network leg and the request resolves through
//! the offline fallback instead.

use tokio::sync::watch;

/// Creates a linked cancellation handle and signal.
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelSignal { rx })
}

/// Fires cancellation for the linked [`CancelSignal`].
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signals cancellation. Idempotent; safe after the signal is dropped.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Observes cancellation requested through a [`CancelHandle`].
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Resolves once cancellation fires.
    ///
    /// Pends forever if the handle is dropped without firing, so a
    /// `select!` racing this against a request simply follows the
    /// request.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow() {
                return;
            }
            if rx.changed().await.is_err() {
                // Handle dropped without ever cancelling.
                std::future::pending::<()>().await;
            }
        }
    }

    /// Returns `true` if cancellation has fired.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }
}
