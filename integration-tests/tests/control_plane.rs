use integration_tests::harness::TestServer;
use integration_tests::harness::providers::UnreachableControlPlane;
use integration_tests::harness::server::events;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::Level;

#[test]
fn unreachable_control_plane_returns_service_unavailable() {
    let srv = TestServer::start_with_provider("multiplex", Arc::new(UnreachableControlPlane));

    let res = srv.get("/webapi/find").send().unwrap();

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = res.json().unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("failed to fetch cluster networking config"));
    assert!(message.contains("control plane unreachable"));
}

#[test]
fn unreachable_control_plane_is_logged() {
    let srv = TestServer::start_with_provider("multiplex", Arc::new(UnreachableControlPlane));

    let res = srv.get("/webapi/find").send().unwrap();
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let events = events();
    let events = events.lock().unwrap();
    let logged = events.iter().any(|e| {
        e.level == Level::ERROR
            && e.field("message") == Some("failed to resolve proxy settings")
            && e.field("error")
                .is_some_and(|error| error.contains("control plane unreachable"))
    });
    assert!(logged, "no error event captured: {events:#?}");
}

#[test]
fn health_endpoint_does_not_need_control_plane() {
    let srv = TestServer::start_with_provider("multiplex", Arc::new(UnreachableControlPlane));

    let res = srv.get("/healthz").send().unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}
