//! Per-call request description

use std::fmt;

/// HTTP verbs the gateway dispatches. The verb also decides where call
/// parameters travel: GET in the query string, POST as a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// Which notifications a call may raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastPolicy {
    /// Show a success notification when the call succeeds.
    pub success: bool,
    /// Show an error notification when the call fails with a backend code.
    pub error: bool,
}

impl Default for ToastPolicy {
    fn default() -> Self {
        ToastPolicy {
            success: false,
            error: true,
        }
    }
}

impl ToastPolicy {
    /// No notifications at all.
    pub fn silent() -> Self {
        ToastPolicy {
            success: false,
            error: false,
        }
    }
}

/// One outgoing call. Built per request and discarded once the response
/// has been handled.
#[derive(Debug)]
pub(crate) struct RequestDescriptor<'a, P: ?Sized> {
    pub path: &'a str,
    pub method: Method,
    pub params: &'a P,
    pub toasts: ToastPolicy,
}
