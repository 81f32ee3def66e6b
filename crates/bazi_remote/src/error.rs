//! Error type for the remote chart source.

use std::time::Duration;

use bazi_core::BaziError;
use thiserror::Error;

/// Why a remote chart could not be used.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote returned status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("remote chart failed consistency check: {0}")]
    Inconsistent(BaziError),

    #[error("invalid remote configuration: {0}")]
    Config(String),
}

pub type RemoteResult<T> = Result<T, RemoteError>;
