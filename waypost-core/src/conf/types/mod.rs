mod net_addr;
pub mod runtime;
pub mod specification;

pub use net_addr::{AddrParseError, NetAddr};
pub use runtime::*;
pub use specification::*;
