//! Error type for link extraction.

use thiserror::Error;

/// Why a link did not yield a video ID.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Input could not be parsed as a URL at all.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Scheme other than `http`/`https` (e.g. `ftp:`, `javascript:`).
    #[error("unsupported URL scheme {0:?}")]
    UnsupportedScheme(String),
    /// URL parsed, but its host is not one the link policy accepts.
    #[error("not a YouTube host: {0:?}")]
    UnsupportedHost(String),
    /// No non-empty `v` parameter and no video ID in the path.
    #[error("no video ID in link")]
    MissingVideoId,
    /// Strict mode only: ID is not 11 characters of `[A-Za-z0-9_-]`.
    #[error("malformed video ID {0:?}")]
    InvalidVideoId(String),
}
