use std::sync::{Arc, Mutex};

use passage::{GatewayConfig, Notifier, SessionMonitor, ToastKind};
use url::Url;

pub fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

/// Gateway config pointing at a mock server, with the language pinned so
/// message assertions do not depend on the host locale.
pub fn test_config(uri: &str) -> GatewayConfig {
    let mut config = GatewayConfig::new(uri);
    config.language = Some("en-US".parse().expect("langid"));
    config
}

/// Notifier that records every toast it is handed.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<(String, ToastKind)>>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<(String, ToastKind)> {
        self.events.lock().expect("notifier lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: ToastKind) {
        self.events
            .lock()
            .expect("notifier lock")
            .push((message.to_string(), kind));
    }
}

/// Session monitor that records every invalidation event.
#[derive(Clone, Default)]
pub struct RecordingSessionMonitor {
    events: Arc<Mutex<Vec<(i32, Url)>>>,
}

impl RecordingSessionMonitor {
    pub fn events(&self) -> Vec<(i32, Url)> {
        self.events.lock().expect("session lock").clone()
    }
}

impl SessionMonitor for RecordingSessionMonitor {
    fn unauthenticated(&self, code: i32, login_url: &Url) {
        self.events
            .lock()
            .expect("session lock")
            .push((code, login_url.clone()));
    }
}
