use crate::networking::{
    ClusterNetworkingConfig, NetworkingConfigProvider, ProxyListenerMode, SharedNetworkingConfig,
};

#[test]
fn listener_mode_parses_lowercase_names() {
    assert_eq!(
        "separate".parse::<ProxyListenerMode>(),
        Ok(ProxyListenerMode::Separate)
    );
    assert_eq!(
        "multiplex".parse::<ProxyListenerMode>(),
        Ok(ProxyListenerMode::Multiplex)
    );
    assert_eq!(
        "Multiplex".parse::<ProxyListenerMode>(),
        Err("Multiplex".to_string())
    );
}

#[test]
fn listener_mode_defaults_to_separate() {
    assert_eq!(
        ClusterNetworkingConfig::default().proxy_listener_mode(),
        ProxyListenerMode::Separate
    );
}

#[tokio::test]
async fn shared_config_serves_latest_snapshot() {
    // Arrange
    let shared = SharedNetworkingConfig::new(ClusterNetworkingConfig::new(
        ProxyListenerMode::Separate,
    ));

    // Act
    let before = shared.cluster_networking_config().await.unwrap();
    let previous = shared.store(ClusterNetworkingConfig::new(ProxyListenerMode::Multiplex));
    let after = shared.cluster_networking_config().await.unwrap();

    // Assert
    assert_eq!(before.proxy_listener_mode(), ProxyListenerMode::Separate);
    assert_eq!(previous.proxy_listener_mode(), ProxyListenerMode::Separate);
    assert_eq!(after.proxy_listener_mode(), ProxyListenerMode::Multiplex);
}
