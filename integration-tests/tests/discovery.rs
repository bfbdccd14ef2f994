use integration_tests::harness::TestServer;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use reqwest::header::{ALLOW, CONTENT_TYPE};
use waypost_core::networking::ProxyListenerMode;
use waypost_core::settings::{DbProxySettings, KubeProxySettings, ProxySettings, SshProxySettings};

#[test]
fn find_returns_separate_listener_layout() {
    let srv = TestServer::start("legacy");

    let res = srv.find();

    assert_eq!(res.server_version, "0.3.1");
    assert_eq!(
        res.proxy,
        ProxySettings {
            kube: KubeProxySettings {
                enabled: true,
                public_addr: "kube.example.com:3026".into(),
                listen_addr: "0.0.0.0:3026".into(),
            },
            ssh: SshProxySettings {
                listen_addr: "0.0.0.0:3023".into(),
                tunnel_listen_addr: "0.0.0.0:3024".into(),
                public_addr: "proxy.example.com:3080".into(),
                ssh_public_addr: "ssh.example.com:3023".into(),
                tunnel_public_addr: "tunnel.example.com:3024".into(),
            },
            db: DbProxySettings {
                postgres_listen_addr: "0.0.0.0:5432".into(),
                postgres_public_addr: "db.example.com:5432".into(),
                mysql_listen_addr: "0.0.0.0:3036".into(),
                mysql_public_addr: "mysql.example.com:3036".into(),
            },
            tls_routing_enabled: false,
        }
    );
}

#[test]
fn find_serves_json_with_legacy_field_names() {
    let srv = TestServer::start("legacy");

    let res = srv.get("/webapi/find").send().unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[CONTENT_TYPE], "application/json");
    let body: serde_json::Value = res.json().unwrap();
    assert_eq!(
        body["proxy"]["ssh"]["ssh_tunnel_public_addr"],
        "tunnel.example.com:3024"
    );
    assert_eq!(body["proxy"]["tls_routing_enabled"], false);
}

#[test]
fn multiplex_collapses_every_listener_onto_web_address() {
    let srv = TestServer::start("multiplex");
    let web = srv.web_addr().to_string();

    let proxy = srv.find().proxy;

    assert!(proxy.tls_routing_enabled);
    assert_eq!(proxy.ssh.listen_addr, web);
    assert_eq!(proxy.ssh.tunnel_listen_addr, web);
    assert_eq!(proxy.kube.listen_addr, web);
    assert_eq!(proxy.db.mysql_listen_addr, web);
    assert_eq!(proxy.db.postgres_listen_addr, web);
    assert_eq!(proxy.ssh.public_addr, "proxy.example.com:443");
    assert_eq!(proxy.db.postgres_public_addr, "proxy.example.com:5432");
    assert_eq!(proxy.db.mysql_public_addr, "");
}

#[test]
fn listener_mode_change_is_visible_on_next_request() {
    let srv = TestServer::start("multiplex");
    assert!(srv.find().proxy.tls_routing_enabled);

    srv.set_listener_mode(ProxyListenerMode::Separate);
    let proxy = srv.find().proxy;

    assert!(!proxy.tls_routing_enabled);
    assert_eq!(proxy.ssh.listen_addr, "0.0.0.0:3023");
    assert_eq!(proxy.db.mysql_listen_addr, "");
}

#[test]
fn v1_multiplex_only_flags_tls_routing() {
    let srv = TestServer::start("legacy");

    srv.set_listener_mode(ProxyListenerMode::Multiplex);
    let proxy = srv.find().proxy;

    assert!(proxy.tls_routing_enabled);
    assert_eq!(proxy.ssh.listen_addr, "0.0.0.0:3023");
    assert_eq!(proxy.kube.listen_addr, "0.0.0.0:3026");
}

#[test]
fn postgres_public_addr_falls_back_to_proxy_host() {
    let srv = TestServer::start("postgres_fallback");

    let db = srv.find().proxy.db;

    assert_eq!(db.postgres_listen_addr, "0.0.0.0");
    assert_eq!(db.postgres_public_addr, "proxy.example.com:5432");
}

#[test]
fn bound_ssh_listener_replaces_configured_address() {
    let srv = TestServer::start("legacy");
    assert_eq!(srv.find().proxy.ssh.listen_addr, "0.0.0.0:3023");

    let bound = srv.bind_ssh_listener();
    let proxy = srv.find().proxy;

    assert_eq!(proxy.ssh.listen_addr, bound);
}

#[test]
fn health_endpoint_reports_ok() {
    let srv = TestServer::start("legacy");

    let res = srv.get("/healthz").send().unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[test]
fn unknown_path_is_not_found() {
    let srv = TestServer::start("legacy");

    let res = srv.get("/webapi/unknown").send().unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[test]
fn non_get_request_is_rejected() {
    let srv = TestServer::start("legacy");

    let res = srv.post("/webapi/find").send().unwrap();

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()[ALLOW], "GET");
}
