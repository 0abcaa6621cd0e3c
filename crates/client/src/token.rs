//! Client for the token endpoint served by `isomap-server`.

use isomap_core::token::{ErrorResponse, TokenResponse};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Fetch the Mapbox access token from a token endpoint URL.
///
/// A `{"error": ...}` body (the server's answer when no token is configured)
/// maps to [`ClientError::MissingToken`].
pub async fn fetch_token(url: &str) -> Result<String> {
    debug!(%url, "requesting access token");
    let resp = reqwest::get(url).await?;
    let status = resp.status();
    let body = resp.text().await?;
    parse_token_body(url, status.as_u16(), &body)
}

/// Interpret a token endpoint answer.
pub fn parse_token_body(url: &str, status: u16, body: &str) -> Result<String> {
    if (200..300).contains(&status) {
        let parsed: TokenResponse =
            serde_json::from_str(body).map_err(|e| ClientError::Decode(e.into()))?;
        if parsed.token.is_empty() {
            return Err(ClientError::MissingToken("empty token".into()));
        }
        return Ok(parsed.token);
    }

    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) => Err(ClientError::MissingToken(err.error)),
        Err(_) => Err(ClientError::Status {
            endpoint: url.to_string(),
            status,
            body: body.chars().take(500).collect(),
        }),
    }
}
