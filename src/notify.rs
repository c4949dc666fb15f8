//! User-facing notifications
//!
//! The gateway never renders UI itself; it reports toast-worthy events to
//! a [`Notifier`] supplied by the embedding application.

use log::{error, info};

/// Visual flavor of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Sink for transient user notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, kind: ToastKind);
}

/// Default notifier: routes toasts to the log.
///
/// Useful for headless embeddings and as a stand-in until the application
/// wires its real UI notifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, kind: ToastKind) {
        match kind {
            ToastKind::Success => info!("{}", message),
            ToastKind::Error => error!("{}", message),
        }
    }
}

/// Notifier that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str, _kind: ToastKind) {}
}
