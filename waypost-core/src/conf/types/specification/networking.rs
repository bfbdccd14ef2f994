use serde::{Deserialize, Serialize};

/// Cluster networking block. In a single-process deployment this stands in for
/// the control-plane record and is re-read on SIGHUP.
#[derive(Debug, Deserialize, Serialize)]
pub struct NetworkingSpec {
    #[serde(default = "default_proxy_listener_mode")]
    pub proxy_listener_mode: String,
}

impl Default for NetworkingSpec {
    fn default() -> Self {
        Self {
            proxy_listener_mode: default_proxy_listener_mode(),
        }
    }
}

fn default_proxy_listener_mode() -> String {
    "separate".to_string()
}
