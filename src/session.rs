//! Session invalidation reporting
//!
//! A backend envelope code of 401 or 403 means the credential pair is no
//! longer accepted. The gateway does not decide what happens next; it
//! reports the event to a [`SessionMonitor`] and returns
//! [`GatewayError::Unauthenticated`](crate::GatewayError::Unauthenticated).
//! The application-level monitor typically drops the stored credentials
//! and navigates the user back to the login entry point.

use log::warn;
use url::Url;

/// Observer for invalidated sessions.
pub trait SessionMonitor: Send + Sync {
    /// Called once per request that came back with an auth-failure code.
    /// `login_url` is the configured base URL of the backend.
    fn unauthenticated(&self, code: i32, login_url: &Url);
}

/// Default monitor: records the event in the log and leaves navigation to
/// the caller handling the `Unauthenticated` error.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSessionMonitor;

impl SessionMonitor for LogSessionMonitor {
    fn unauthenticated(&self, code: i32, login_url: &Url) {
        warn!("session invalidated (code {}), login at {}", code, login_url);
    }
}
