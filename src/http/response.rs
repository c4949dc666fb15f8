//! Backend response envelope handling
//!
//! The backend answers every call with the same JSON shape regardless of
//! outcome: `{ "code": <i32>, "msg": <string>, "data": <payload|null> }`.
//! The application status code is carried inside the envelope, layered on
//! top of the HTTP transport status.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope code for a successful call.
pub const CODE_OK: i32 = 0;
/// Envelope code for an expired or missing session.
pub const CODE_UNAUTHENTICATED: i32 = 401;
/// Envelope code for a rejected session.
pub const CODE_FORBIDDEN: i32 = 403;
/// Synthesized code for failures that never produced a backend envelope.
pub const CODE_INTERNAL: i32 = -1;

/// Uniform backend response envelope, typed over its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<T>,
}

/// Envelope with its payload still undecoded.
pub type RawEnvelope = ApiEnvelope<Value>;

/// Three-way classification of an envelope code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Success,
    Unauthenticated,
    Failure,
}

impl<T> ApiEnvelope<T> {
    pub fn disposition(&self) -> Disposition {
        match self.code {
            CODE_OK => Disposition::Success,
            CODE_UNAUTHENTICATED | CODE_FORBIDDEN => Disposition::Unauthenticated,
            _ => Disposition::Failure,
        }
    }
}

impl RawEnvelope {
    /// The generic-failure envelope handed to callers when response
    /// handling itself fails.
    pub fn internal() -> Self {
        RawEnvelope {
            code: CODE_INTERNAL,
            msg: "error".to_string(),
            data: None,
        }
    }

    /// Decode the payload into `T`, keeping code and message.
    pub fn into_typed<T>(self) -> serde_json::Result<ApiEnvelope<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let data = match self.data {
            Some(Value::Null) | None => None,
            Some(value) => Some(serde_json::from_value(value)?),
        };
        Ok(ApiEnvelope {
            code: self.code,
            msg: self.msg,
            data,
        })
    }
}
