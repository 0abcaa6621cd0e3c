//! Async client for the Mapbox Isochrone API.
//!
//! One request per (point, minutes, mode); the response body must be a
//! GeoJSON FeatureCollection. No retries: the caller decides what a failure
//! means.

use std::time::Duration;

use async_trait::async_trait;
use isomap_core::{FeatureCollection, TravelQuery};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::source::IsochroneSource;

/// Public Mapbox API host.
pub const MAPBOX_API_HOST: &str = "https://api.mapbox.com";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for [`IsochroneClient`].
#[derive(Debug, Clone)]
pub struct IsochroneClientOptions {
    /// API host, without trailing path (default [`MAPBOX_API_HOST`]).
    pub base_url: String,
    /// Per-request timeout. `None` leaves the HTTP stack default in place.
    pub request_timeout: Option<Duration>,
}

impl Default for IsochroneClientOptions {
    fn default() -> Self {
        Self {
            base_url: MAPBOX_API_HOST.to_string(),
            request_timeout: None,
        }
    }
}

// ---------------------------------------------------------------------------
// URL building
// ---------------------------------------------------------------------------

/// Path of the isochrone endpoint for `query`, without host or query string.
pub fn isochrone_path(query: &TravelQuery) -> String {
    format!(
        "/isochrone/v1/mapbox/{}/{}",
        query.mode.wire_profile(),
        query.point
    )
}

/// Full request URL for `query`.
///
/// `transit` is sent as `driving-traffic`; polygons are always requested.
pub fn isochrone_url(base_url: &str, query: &TravelQuery, token: &str) -> String {
    format!(
        "{}{}?contours_minutes={}&polygons=true&access_token={}",
        base_url.trim_end_matches('/'),
        isochrone_path(query),
        query.minutes,
        token
    )
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Async isochrone client bound to one access token.
pub struct IsochroneClient {
    client: reqwest::Client,
    token: String,
    options: IsochroneClientOptions,
}

impl IsochroneClient {
    /// Create a new client.
    pub fn new(token: impl Into<String>, options: IsochroneClientOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: token.into(),
            options,
        })
    }

    pub fn options(&self) -> &IsochroneClientOptions {
        &self.options
    }

    /// Request URL for `query`, including the access token.
    pub fn url_for(&self, query: &TravelQuery) -> String {
        isochrone_url(&self.options.base_url, query, &self.token)
    }

    /// Fetch one isochrone.
    pub async fn fetch(&self, query: &TravelQuery) -> Result<FeatureCollection> {
        let url = self.url_for(query);
        let endpoint = isochrone_path(query);
        debug!(%endpoint, minutes = query.minutes, "requesting isochrone");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                endpoint,
                status: status.as_u16(),
                body: body.chars().take(500).collect(),
            });
        }

        let body = resp.text().await?;
        Ok(FeatureCollection::from_json_str(&body)?)
    }
}

#[async_trait]
impl IsochroneSource for IsochroneClient {
    async fn fetch(&self, query: &TravelQuery) -> Result<FeatureCollection> {
        IsochroneClient::fetch(self, query).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
