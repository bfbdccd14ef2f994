mod discovery;
mod entrypoint;
mod networking;
mod proxy;
mod server;

pub use discovery::DiscoverySpec;
pub use entrypoint::EntrypointSpec;
pub use networking::NetworkingSpec;
pub use proxy::{DbListenerSpec, KubeProxySpec, ProxySpec, SshProxySpec};
pub use server::ServerSpec;
