use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

/// A listener or public address as written by an operator.
///
/// Holds `host`, `host:port` or `[v6]:port`, or nothing at all (the empty
/// sentinel used for services that are not configured). The text is kept
/// verbatim so clients see exactly what was configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NetAddr {
    addr: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddrParseError {
    #[error("address '{addr}' has an empty host")]
    EmptyHost { addr: String },

    #[error("address '{addr}' has an invalid port '{port}'")]
    InvalidPort { addr: String, port: String },

    #[error("address '{addr}' has an unterminated IPv6 bracket")]
    UnterminatedBracket { addr: String },
}

impl NetAddr {
    /// The empty sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps an address that was already validated by the config loader.
    pub(crate) fn from_validated(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }

    /// Formats a host/port pair, bracketing IPv6 hosts.
    pub fn join(host: &str, port: u16) -> Self {
        let addr = if host.contains(':') {
            format!("[{host}]:{port}")
        } else {
            format!("{host}:{port}")
        };
        Self { addr }
    }

    pub fn is_empty(&self) -> bool {
        self.addr.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.addr
    }

    /// Host portion of the address.
    ///
    /// When the address carries no port the whole address is the host.
    pub fn host(&self) -> &str {
        match split_host_port(&self.addr) {
            Some((host, _)) => host,
            None => self
                .addr
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
                .unwrap_or(&self.addr),
        }
    }

    /// Explicit port of the address, or `default` when it has none.
    pub fn port(&self, default: u16) -> u16 {
        split_host_port(&self.addr)
            .and_then(|(_, port)| port.parse().ok())
            .unwrap_or(default)
    }
}

/// Splits `host:port` / `[host]:port`. Returns `None` when no port is present.
fn split_host_port(addr: &str) -> Option<(&str, &str)> {
    if let Some(rest) = addr.strip_prefix('[') {
        let (host, tail) = rest.split_once(']')?;
        let port = tail.strip_prefix(':')?;
        return Some((host, port));
    }

    let (host, port) = addr.rsplit_once(':')?;
    if host.contains(':') {
        // Bare IPv6 literal without a port.
        return None;
    }
    Some((host, port))
}

impl FromStr for NetAddr {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::empty());
        }

        if s.starts_with('[') && !s.contains(']') {
            return Err(AddrParseError::UnterminatedBracket { addr: s.to_string() });
        }

        let addr = Self::from_validated(s);
        if addr.host().is_empty() {
            return Err(AddrParseError::EmptyHost { addr: s.to_string() });
        }

        if let Some((_, port)) = split_host_port(s) {
            if port.parse::<u16>().is_err() {
                return Err(AddrParseError::InvalidPort {
                    addr: s.to_string(),
                    port: port.to_string(),
                });
            }
        } else if s.starts_with('[') && !s.ends_with(']') {
            // "[::1]junk"
            return Err(AddrParseError::InvalidPort {
                addr: s.to_string(),
                port: s.rsplit(']').next().unwrap_or_default().to_string(),
            });
        }

        Ok(addr)
    }
}

impl From<SocketAddr> for NetAddr {
    fn from(addr: SocketAddr) -> Self {
        Self::join(&addr.ip().to_string(), addr.port())
    }
}

impl fmt::Display for NetAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.addr)
    }
}

impl Serialize for NetAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.addr)
    }
}

impl<'de> Deserialize<'de> for NetAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
