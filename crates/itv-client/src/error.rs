use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the search and load clients.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Endpoint unreachable, TLS failure, timeout, or a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON shape the service documents.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered but reported a failure status.
    #[error("service error: {0}")]
    Application(String),

    #[error("invalid endpoint URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Upload refused locally; nothing was sent.
    #[error("invalid upload: {0}")]
    EmptyUpload(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Returns `true` for failures where the service could not be reached or
    /// did not answer with a usable body, as opposed to an answer reporting
    /// an error.
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ClientError::Http(_) | ClientError::Deserialize { .. })
    }
}
