//! passage - a typed API request gateway
//!
//! This crate wraps an async HTTP client for applications talking to a
//! backend that answers with a uniform `{ code, msg, data }` envelope.
//! Every outgoing call carries a credential header pair read from an
//! injected store, and envelope outcomes are surfaced both as typed
//! results and as user-facing notifications through a pluggable notifier.

pub mod config;
pub mod error;
pub mod http;
pub mod i18n;
pub mod logging;
pub mod notify;
pub mod session;
pub mod utils;

pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use http::auth::{CredentialStore, Credentials, SharedCredentials, StaticCredentials};
pub use http::request::{Method, ToastPolicy};
pub use http::response::{ApiEnvelope, RawEnvelope};
pub use http::ApiGateway;
pub use notify::{LogNotifier, Notifier, NullNotifier, ToastKind};
pub use session::{LogSessionMonitor, SessionMonitor};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
