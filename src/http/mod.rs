//! HTTP gateway module
//!
//! This module provides the core request gateway: one HTTP call per
//! operation, credential headers injected at dispatch time, the backend
//! envelope interpreted into a typed result, and toast-worthy outcomes
//! reported to the configured notifier.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use unic_langid::LanguageIdentifier;
use url::Url;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::i18n;
use crate::notify::{LogNotifier, Notifier, ToastKind};
use crate::session::{LogSessionMonitor, SessionMonitor};
use crate::utils::UrlUtils;

pub mod auth;
pub mod request;
pub mod response;

use auth::CredentialStore;
use request::{Method, RequestDescriptor, ToastPolicy};
use response::{ApiEnvelope, Disposition, RawEnvelope};

/// API request gateway
pub struct ApiGateway {
    client: reqwest::Client,
    base_url: Url,
    language: LanguageIdentifier,
    credentials: Arc<dyn CredentialStore>,
    notifier: Arc<dyn Notifier>,
    session: Arc<dyn SessionMonitor>,
}

impl ApiGateway {
    /// Create a new gateway from the given configuration and credential
    /// store. Notifications go to [`LogNotifier`] and session events to
    /// [`LogSessionMonitor`] until the application overrides them.
    pub fn new(config: GatewayConfig, credentials: Arc<dyn CredentialStore>) -> Result<Self> {
        let base_url = UrlUtils::validate_base_url(&config.base_url)?;
        let language = i18n::resolve_language(config.language.as_ref());

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        if !config.headers.is_empty() {
            let mut headers = HeaderMap::new();
            for (key, value) in &config.headers {
                let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                    GatewayError::Config(format!("Invalid header name '{}': {}", key, e))
                })?;
                let value = HeaderValue::from_str(value).map_err(|e| {
                    GatewayError::Config(format!("Invalid value for header '{}': {}", key, e))
                })?;
                headers.insert(name, value);
            }
            builder = builder.default_headers(headers);
        }

        let client = builder.build().map_err(GatewayError::Http)?;

        Ok(Self {
            client,
            base_url,
            language,
            credentials,
            notifier: Arc::new(LogNotifier),
            session: Arc::new(LogSessionMonitor),
        })
    }

    /// Route notifications to the application's UI.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Route session-invalidation events to the application.
    pub fn with_session_monitor(mut self, session: Arc<dyn SessionMonitor>) -> Self {
        self.session = session;
        self
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET request with the default toast policy (errors only).
    /// Parameters are sent as the query string.
    pub async fn get<T, P>(&self, path: &str, params: &P) -> Result<ApiEnvelope<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.get_with(path, params, ToastPolicy::default()).await
    }

    /// GET request with an explicit toast policy.
    pub async fn get_with<T, P>(
        &self,
        path: &str,
        params: &P,
        toasts: ToastPolicy,
    ) -> Result<ApiEnvelope<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.dispatch(RequestDescriptor {
            path,
            method: Method::Get,
            params,
            toasts,
        })
        .await
    }

    /// POST request with the default toast policy (errors only).
    /// Parameters are sent as a JSON body.
    pub async fn post<T, P>(&self, path: &str, params: &P) -> Result<ApiEnvelope<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.post_with(path, params, ToastPolicy::default()).await
    }

    /// POST request with an explicit toast policy.
    pub async fn post_with<T, P>(
        &self,
        path: &str,
        params: &P,
        toasts: ToastPolicy,
    ) -> Result<ApiEnvelope<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.dispatch(RequestDescriptor {
            path,
            method: Method::Post,
            params,
            toasts,
        })
        .await
    }

    /// Execute one call and interpret the response envelope.
    async fn dispatch<T, P>(&self, descriptor: RequestDescriptor<'_, P>) -> Result<ApiEnvelope<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let url = UrlUtils::join(&self.base_url, descriptor.path)?;
        debug!("{} {}", descriptor.method, url);

        let mut request = self
            .client
            .request(descriptor.method.as_reqwest(), url.clone());

        request = match descriptor.method {
            Method::Get => request.query(descriptor.params),
            Method::Post => request.json(descriptor.params),
        };

        // Credentials are read at call time so that a login elsewhere in
        // the application is reflected by the next request. These two
        // headers win over any configured defaults.
        request = self.credentials.load().apply(request);

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return Err(self.transport_failure(err)),
        };

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => return Err(self.transport_failure(err)),
        };

        let envelope: RawEnvelope = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(err) => return Err(self.handling_failure(err)),
        };

        match envelope.disposition() {
            Disposition::Success => {
                if descriptor.toasts.success {
                    let message = if envelope.msg.is_empty() {
                        i18n::default_success_message(&self.language)
                    } else {
                        envelope.msg.clone()
                    };
                    self.notifier.notify(&message, ToastKind::Success);
                }
                match envelope.into_typed() {
                    Ok(typed) => Ok(typed),
                    Err(err) => Err(self.handling_failure(err)),
                }
            }
            Disposition::Unauthenticated => {
                warn!(
                    "{} {} rejected with auth code {}",
                    descriptor.method, url, envelope.code
                );
                self.session.unauthenticated(envelope.code, &self.base_url);
                Err(GatewayError::Unauthenticated(envelope.code))
            }
            Disposition::Failure => {
                warn!(
                    "{} {} failed with code {}: {}",
                    descriptor.method, url, envelope.code, envelope.msg
                );
                if descriptor.toasts.error {
                    let message = i18n::localize_api_code(&self.language, envelope.code);
                    self.notifier.notify(&message, ToastKind::Error);
                }
                Err(GatewayError::Api(envelope))
            }
        }
    }

    /// Transport never produced a response. Only timeouts raise a user
    /// notification; every transport failure is returned to the caller.
    fn transport_failure(&self, err: reqwest::Error) -> GatewayError {
        warn!("transport failure: {}", err);
        if err.is_timeout() {
            self.notifier
                .notify(&i18n::timeout_message(&self.language), ToastKind::Error);
        }
        GatewayError::Http(err)
    }

    /// The response arrived but could not be handled as an envelope.
    fn handling_failure(&self, err: serde_json::Error) -> GatewayError {
        warn!("response handling failure: {}", err);
        self.notifier
            .notify(&i18n::generic_error_message(&self.language), ToastKind::Error);
        GatewayError::Malformed(err)
    }
}
