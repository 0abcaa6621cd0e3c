//! Wire format of the token endpoint.

use serde::{Deserialize, Serialize};

/// Route the token endpoint is served on.
pub const TOKEN_ROUTE: &str = "/api/mapbox-token";

/// Error message returned when no token is configured.
pub const MISSING_TOKEN_MESSAGE: &str = "Mapbox token is not set";

/// Successful token response: `{"token": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Failure body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn missing_token() -> Self {
        Self {
            error: MISSING_TOKEN_MESSAGE.to_string(),
        }
    }
}
