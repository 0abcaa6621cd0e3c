//! Blocking (synchronous) API for native platforms.
//!
//! Wraps the async clients with a Tokio runtime so callers don't need to
//! manage their own async runtime.

#[cfg(feature = "native")]
mod inner {
    use isomap_core::{FeatureCollection, TravelQuery};

    use crate::error::{ClientError, Result};
    use crate::gradient::{fetch_gradient, GradientOptions};
    use crate::isochrone::{IsochroneClient, IsochroneClientOptions};

    fn runtime() -> Result<tokio::runtime::Runtime> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))
    }

    /// Blocking wrapper around [`IsochroneClient`].
    ///
    /// Uses an internal single-threaded Tokio runtime. Not available on WASM.
    pub struct IsochroneClientBlocking {
        rt: tokio::runtime::Runtime,
        inner: IsochroneClient,
    }

    impl IsochroneClientBlocking {
        pub fn new(token: impl Into<String>, options: IsochroneClientOptions) -> Result<Self> {
            Ok(Self {
                rt: runtime()?,
                inner: IsochroneClient::new(token, options)?,
            })
        }

        /// Fetch one isochrone (blocking).
        pub fn fetch(&self, query: &TravelQuery) -> Result<FeatureCollection> {
            self.rt.block_on(self.inner.fetch(query))
        }

        /// Fetch one isochrone per threshold in batches (blocking).
        pub fn fetch_gradient(
            &self,
            query: TravelQuery,
            minutes: &[u32],
            options: &GradientOptions,
            progress: impl FnMut(usize, usize),
        ) -> Result<Vec<FeatureCollection>> {
            self.rt
                .block_on(fetch_gradient(&self.inner, query, minutes, options, progress))
        }

        pub fn inner(&self) -> &IsochroneClient {
            &self.inner
        }
    }

    /// One-shot: fetch the access token from a token endpoint.
    pub fn fetch_token(url: &str) -> Result<String> {
        runtime()?.block_on(crate::token::fetch_token(url))
    }
}

#[cfg(feature = "native")]
pub use inner::*;
