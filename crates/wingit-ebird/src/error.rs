use std::path::PathBuf;
use thiserror::Error;

/// Failure reading a local JSON export or snapshot
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure calling the eBird API
#[derive(Debug, Error)]
pub enum EbirdError {
    #[error("ebird: unauthorized (bad token?): {0}")]
    Unauthorized(String),
    #[error("ebird: rate limited: {0}")]
    RateLimited(String),
    #[error("ebird: bad request: {0}")]
    BadRequest(String),
    #[error("ebird: http {status}: {body}")]
    Http { status: u16, body: String },
    #[error("ebird: invalid base url {0:?}")]
    InvalidBaseUrl(String),
    #[error("ebird: request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("ebird: decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
