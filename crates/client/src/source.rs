//! Abstraction over where isochrones come from.

use std::sync::Arc;

use async_trait::async_trait;
use isomap_core::{FeatureCollection, TravelQuery};

use crate::error::Result;

/// Anything that can answer an isochrone query.
///
/// [`IsochroneClient`](crate::IsochroneClient) is the network implementation;
/// tests and offline tools plug in their own.
#[async_trait]
pub trait IsochroneSource: Send + Sync {
    /// Fetch the isochrone for one query.
    async fn fetch(&self, query: &TravelQuery) -> Result<FeatureCollection>;
}

#[async_trait]
impl<T: IsochroneSource + ?Sized> IsochroneSource for Arc<T> {
    async fn fetch(&self, query: &TravelQuery) -> Result<FeatureCollection> {
        (**self).fetch(query).await
    }
}

#[async_trait]
impl<T: IsochroneSource + ?Sized> IsochroneSource for Box<T> {
    async fn fetch(&self, query: &TravelQuery) -> Result<FeatureCollection> {
        (**self).fetch(query).await
    }
}

#[async_trait]
impl<'a, T: IsochroneSource + ?Sized> IsochroneSource for &'a T {
    async fn fetch(&self, query: &TravelQuery) -> Result<FeatureCollection> {
        (**self).fetch(query).await
    }
}
