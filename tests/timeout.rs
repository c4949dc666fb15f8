mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{can_bind_localhost, test_config, RecordingNotifier};
use passage::{ApiGateway, GatewayError, StaticCredentials, ToastKind};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_timeout_rejects_and_notifies() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "code": 0 }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut config = test_config(&server.uri());
    config.timeout = Duration::from_millis(200);

    let notifier = RecordingNotifier::default();
    let gateway = ApiGateway::new(config, Arc::new(StaticCredentials::new("token", "1")))
        .expect("gateway should build")
        .with_notifier(Arc::new(notifier.clone()));

    let err = gateway
        .get::<Value, _>("/slow", &Vec::<(String, String)>::new())
        .await
        .expect_err("request should time out");

    // The original transport error is preserved.
    assert!(err.is_timeout());
    assert!(matches!(err, GatewayError::Http(_)));

    let langid = "en-US".parse().expect("langid");
    let expected = passage::i18n::timeout_message(&langid);
    assert_eq!(notifier.events(), vec![(expected, ToastKind::Error)]);
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_connect_failure_rejects_without_toast() {
    if !can_bind_localhost() {
        return;
    }

    // Grab a free port and release it so the connect attempt is refused.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };

    let notifier = RecordingNotifier::default();
    let gateway = ApiGateway::new(
        test_config(&format!("http://127.0.0.1:{}", port)),
        Arc::new(StaticCredentials::new("token", "1")),
    )
    .expect("gateway should build")
    .with_notifier(Arc::new(notifier.clone()));

    let err = gateway
        .get::<Value, _>("/ping", &Vec::<(String, String)>::new())
        .await
        .expect_err("request should fail");

    assert!(matches!(err, GatewayError::Http(_)));
    assert!(!err.is_timeout());
    // Only timeouts are toast-worthy transport failures.
    assert!(notifier.events().is_empty());
}
