mod discovery_gateway;
mod handlers;

pub use discovery_gateway::DiscoveryGateway;
pub use handlers::DiscoveryResponse;
