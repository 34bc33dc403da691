//! Error types for cineverse.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Result of a single catalog request.
pub type FetchResult<T> = std::result::Result<T, RequestError>;

/// Failure of one request against the remote catalog.
///
/// This is the only error the page controllers ever see. They log it and
/// keep whatever they were showing before.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("TMDB returned {status} for {path}")]
    Status { status: u16, path: String },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Main error type for cineverse.
#[derive(Error, Debug)]
pub enum Error {
    // Preflight errors
    #[error("TMDB credentials not configured. Set TMDB_API_KEY or TMDB_ACCESS_TOKEN")]
    TmdbCredentialsMissing,

    #[error("TMDB credentials rejected")]
    TmdbCredentialsInvalid,

    // Navigation errors
    #[error("Unknown route: {0}")]
    InvalidRoute(String),

    // Config errors
    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    // Catalog errors
    #[error(transparent)]
    Request(#[from] RequestError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
