use crate::conf::types::NetAddr;
use once_cell::sync::OnceCell;
use std::io;
use std::net::TcpListener;

/// SSH proxy listen address as actually bound.
///
/// The configured address may ask for an ephemeral port (`127.0.0.1:0`), so
/// the concrete address is only known once the listener is up. The listener
/// startup path writes it exactly once; the resolver reads it afterwards.
#[derive(Debug, Default)]
pub struct SshListenAddr {
    bound: OnceCell<NetAddr>,
}

impl SshListenAddr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the bound address. A second write is rejected and handed back.
    pub fn set(&self, addr: NetAddr) -> Result<(), NetAddr> {
        self.bound.set(addr).inspect_err(|rejected| {
            tracing::warn!(
                current = %self.bound.get().map(NetAddr::as_str).unwrap_or_default(),
                rejected = %rejected,
                "ssh listen address already recorded"
            );
        })
    }

    /// Records the local address of a freshly bound listener.
    ///
    /// Fails with [`io::ErrorKind::AlreadyExists`] when an address was already
    /// recorded; the earlier address stays in place.
    pub fn record_bound(&self, listener: &TcpListener) -> io::Result<()> {
        let addr = NetAddr::from(listener.local_addr()?);
        tracing::info!(addr = %addr, "ssh proxy listener bound");
        self.set(addr).map_err(|rejected| {
            io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("ssh listen address already recorded, ignoring {rejected}"),
            )
        })
    }

    pub fn get(&self) -> Option<&NetAddr> {
        self.bound.get()
    }
}
