mod discovery;

pub use discovery::{DiscoveryHandler, DiscoveryResponse};
