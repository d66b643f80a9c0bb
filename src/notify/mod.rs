//! Notification sink for surfacing failures to the user.
//!
//! The session store talks to the UI through the `Notifier` trait so its
//! logic stays testable without one. Each call is independent and
//! fire-and-forget: no queueing, no coalescing, and never any effect on
//! session state. `LogNotifier` is the headless default, routing
//! messages onto `tracing`.

use std::time::Duration;

use tracing::{error, info, warn};

/// Default display duration for a notification
const DEFAULT_DURATION_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Screen anchor for the notification overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyOptions {
    /// How long the message stays on screen
    pub duration: Duration,
    /// Which corner the overlay is anchored to
    pub position: Corner,
    /// Whether the user can dismiss the message early
    pub closable: bool,
}

impl Default for NotifyOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(DEFAULT_DURATION_SECS),
            position: Corner::TopRight,
            closable: true,
        }
    }
}

/// Capability for rendering a transient message overlay.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str, options: NotifyOptions);
}

/// Notifier that logs instead of rendering, for headless use and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, severity: Severity, message: &str, _options: NotifyOptions) {
        match severity {
            Severity::Info | Severity::Success => info!(?severity, "{message}"),
            Severity::Warning => warn!("{message}"),
            Severity::Error => error!("{message}"),
        }
    }
}
