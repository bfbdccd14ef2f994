use crate::settings::{ProxySettings, SshProxySettings};
use serde_json::json;

#[test]
fn unset_addresses_serialize_as_empty_strings() {
    // Act
    let value = serde_json::to_value(ProxySettings::default()).unwrap();

    // Assert
    assert_eq!(
        value,
        json!({
            "kube": {
                "enabled": false,
                "public_addr": "",
                "listen_addr": ""
            },
            "ssh": {
                "listen_addr": "",
                "tunnel_listen_addr": "",
                "public_addr": "",
                "ssh_public_addr": "",
                "ssh_tunnel_public_addr": ""
            },
            "db": {
                "postgres_listen_addr": "",
                "postgres_public_addr": "",
                "mysql_listen_addr": "",
                "mysql_public_addr": ""
            },
            "tls_routing_enabled": false
        })
    );
}

#[test]
fn tunnel_public_addr_uses_legacy_field_name() {
    // Arrange
    let settings = ProxySettings {
        ssh: SshProxySettings {
            tunnel_public_addr: "tunnel.example.com:3024".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    // Act
    let value = serde_json::to_value(&settings).unwrap();

    // Assert
    assert_eq!(value["ssh"]["ssh_tunnel_public_addr"], "tunnel.example.com:3024");
    assert!(value["ssh"].get("tunnel_public_addr").is_none());
}

#[test]
fn older_payloads_with_missing_fields_still_decode() {
    // Arrange
    let body = r#"{
        "kube": {"enabled": false},
        "ssh": {"listen_addr": "proxy.example.com:3023"},
        "db": {},
        "tls_routing_enabled": false
    }"#;

    // Act
    let settings: ProxySettings = serde_json::from_str(body).unwrap();

    // Assert
    assert_eq!(settings.ssh.listen_addr, "proxy.example.com:3023");
    assert_eq!(settings.db.postgres_public_addr, "");
}
