use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Configuration schema version.
///
/// `V1` lays every proxy service out on its own listener. `V2` allows all of
/// them to share the web listener when the cluster runs in multiplex mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigVersion {
    #[default]
    V1,
    V2,
}

impl TryFrom<u32> for ConfigVersion {
    type Error = u32;

    fn try_from(version: u32) -> Result<Self, Self::Error> {
        match version {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            other => Err(other),
        }
    }
}

impl fmt::Display for ConfigVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2 => write!(f, "v2"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub version: ConfigVersion,
    pub threads: Option<usize>,
    pub pid_file: Option<PathBuf>,
}
