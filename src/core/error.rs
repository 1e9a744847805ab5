// src/core/error.rs
use thiserror::Error;

/// Why a backend call failed. Never shown raw to the user; the panel maps
/// every variant onto a banner message and logs the detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection refused, timeout, DNS, TLS...
    #[error("network error on {url}: {reason}")]
    Network { url: String, reason: String },

    /// Server answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Http { url: String, status: u16 },

    /// Body was not the JSON shape we expect.
    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Network { url, .. }
            | FetchError::Http { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
