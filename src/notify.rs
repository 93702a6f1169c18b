//! User-facing notifications.
//!
//! Every service reports outcomes through a [`Notifier`] rather than
//! printing or returning presentation strings. The UI layer supplies an
//! implementation that renders toasts; [`TracingNotifier`] is the default
//! sink for headless use and tests.

use mockall::automock;
use tracing::{info, warn};

/// Sink for single, human-readable outcome messages.
#[automock]
pub trait Notifier: Send + Sync {
    /// Reports a successful operation.
    fn success(&self, message: &str);

    /// Reports a failure or warning.
    fn error(&self, message: &str);
}

/// [`Notifier`] that routes messages to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "velvet_cart::notify", "{message}");
    }

    fn error(&self, message: &str) {
        warn!(target: "velvet_cart::notify", "{message}");
    }
}
