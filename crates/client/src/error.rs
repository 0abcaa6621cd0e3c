//! Error types for the isochrone and token clients.

use thiserror::Error;

/// Errors produced by the isomap HTTP clients.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure. Request URLs are stripped before wrapping since
    /// isochrone URLs carry the access token.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("invalid response body: {0}")]
    Decode(#[from] isomap_core::Error),

    #[error("token endpoint error: {0}")]
    MissingToken(String),

    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url())
    }
}

impl ClientError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
