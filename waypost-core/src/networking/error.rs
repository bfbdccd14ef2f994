use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkingError {
    #[error("cluster networking config unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("cluster networking config fetch did not complete within {timeout:?}")]
    DeadlineExceeded { timeout: Duration },
}
