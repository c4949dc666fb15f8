//! Configuration management for the gateway

use std::collections::HashMap;
use std::time::Duration;

use unic_langid::LanguageIdentifier;

use crate::error::{GatewayError, Result};

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "PASSAGE_BASE_URL";

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Backend base URL every request path is resolved against.
    pub base_url: String,
    /// Total per-request timeout.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: Option<String>,
    /// Extra headers sent with every request. The credential headers are
    /// applied after these and win on collision.
    pub headers: HashMap<String, String>,
    /// UI language for notification messages; resolved from the
    /// environment when unset.
    pub language: Option<LanguageIdentifier>,
}

impl GatewayConfig {
    /// Configuration for the given base URL with default transport settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        GatewayConfig {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: Some(format!("passage/{}", crate::VERSION)),
            headers: HashMap::new(),
            language: None,
        }
    }

    /// Build configuration from the environment-provided base URL.
    pub fn from_env() -> Result<Self> {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Ok(Self::new(value.trim())),
            _ => Err(GatewayError::Config(format!(
                "{} is not set",
                BASE_URL_ENV
            ))),
        }
    }
}
