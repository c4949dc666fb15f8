//! Credential header injection
//!
//! The backend authenticates calls through a header pair: an access token
//! and the id of the user it was issued to. The pair is owned by the
//! embedding application (written at login/logout) and read here on every
//! request, so a token refresh is picked up by the next call without
//! rebuilding the gateway.

use std::sync::{Arc, RwLock};

/// Header carrying the access token.
pub const ACCESS_TOKEN_HEADER: &str = "Access-Token";
/// Header carrying the user id the token was issued to.
pub const USER_ID_HEADER: &str = "uid";

/// The credential pair sent with every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
    pub user_id: String,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Credentials {
            access_token: access_token.into(),
            user_id: user_id.into(),
        }
    }

    /// Set both credential headers on an outgoing request, overwriting any
    /// previously-set values for those two names.
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .header(USER_ID_HEADER, &self.user_id)
    }
}

/// Source of the credential pair, read once per request.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Credentials;
}

/// A fixed credential pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials(Credentials);

impl StaticCredentials {
    pub fn new(access_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        StaticCredentials(Credentials::new(access_token, user_id))
    }
}

impl CredentialStore for StaticCredentials {
    fn load(&self) -> Credentials {
        self.0.clone()
    }
}

/// A credential pair shared with the rest of the application.
///
/// Login and logout flows call [`SharedCredentials::set`]; the gateway
/// reads the current pair at dispatch time.
#[derive(Debug, Clone, Default)]
pub struct SharedCredentials {
    inner: Arc<RwLock<Credentials>>,
}

impl SharedCredentials {
    pub fn new(credentials: Credentials) -> Self {
        SharedCredentials {
            inner: Arc::new(RwLock::new(credentials)),
        }
    }

    /// Replace the stored pair. Called at login/logout, never by the
    /// gateway itself.
    pub fn set(&self, credentials: Credentials) {
        match self.inner.write() {
            Ok(mut guard) => *guard = credentials,
            Err(poisoned) => *poisoned.into_inner() = credentials,
        }
    }
}

impl CredentialStore for SharedCredentials {
    fn load(&self) -> Credentials {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
