//! Batched fetching of the isochrones behind a gradient.
//!
//! Thresholds are fetched a few at a time: every request in a batch runs
//! concurrently, the next batch starts only once the previous one has fully
//! completed, and a short pause separates batches to stay under the API rate
//! limit.

use std::time::Duration;

use futures::future::try_join_all;
use isomap_core::{FeatureCollection, TravelQuery};
use tracing::debug;

use crate::error::Result;
use crate::source::IsochroneSource;

/// Configuration for [`fetch_gradient`].
#[derive(Debug, Clone)]
pub struct GradientOptions {
    /// Requests issued together (default 3).
    pub batch_size: usize,
    /// Pause between consecutive batches (default 250 ms).
    pub batch_delay: Duration,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            batch_size: 3,
            batch_delay: Duration::from_millis(250),
        }
    }
}

/// Fetch one isochrone per entry of `minutes`, in order.
///
/// `progress(done, total)` is called before each batch, with `done` counting
/// the requests issued once that batch is sent. The first failing request
/// aborts the whole gradient; results already fetched are discarded.
pub async fn fetch_gradient<S, F>(
    source: &S,
    query: TravelQuery,
    minutes: &[u32],
    options: &GradientOptions,
    mut progress: F,
) -> Result<Vec<FeatureCollection>>
where
    S: IsochroneSource + ?Sized,
    F: FnMut(usize, usize),
{
    let total = minutes.len();
    let batch_size = options.batch_size.max(1);
    let mut results = Vec::with_capacity(total);

    for (batch_idx, batch) in minutes.chunks(batch_size).enumerate() {
        let start = batch_idx * batch_size;
        let done = (start + batch_size).min(total);
        progress(done, total);
        debug!(batch = batch_idx, ?batch, "fetching isochrone batch");

        let futs = batch.iter().map(|&m| {
            let q = query.with_minutes(m);
            async move { source.fetch(&q).await }
        });
        results.extend(try_join_all(futs).await?);

        if done < total && !options.batch_delay.is_zero() {
            tokio::time::sleep(options.batch_delay).await;
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use async_trait::async_trait;
    use isomap_core::{Feature, Geometry, LngLat, TravelMode};
    use std::sync::Mutex;

    /// Records request order and answers with a one-feature collection whose
    /// `contour` property is the requested minutes.
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<u32>>,
        fail_on: Option<u32>,
    }

    #[async_trait]
    impl IsochroneSource for Recorder {
        async fn fetch(&self, query: &TravelQuery) -> Result<FeatureCollection> {
            self.calls.lock().unwrap().push(query.minutes);
            if self.fail_on == Some(query.minutes) {
                return Err(ClientError::Status {
                    endpoint: "/isochrone".into(),
                    status: 429,
                    body: String::new(),
                });
            }
            let mut f = Feature::new(Geometry::Polygon { coordinates: vec![] });
            f.set_property("contour", query.minutes);
            Ok(FeatureCollection::new(vec![f]))
        }
    }

    fn query() -> TravelQuery {
        TravelQuery::new(LngLat::new(0.0, 0.0).unwrap(), 30, TravelMode::Walking)
    }

    fn no_delay() -> GradientOptions {
        GradientOptions {
            batch_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn results_follow_threshold_order() {
        let source = Recorder::default();
        let minutes = [30, 27, 24, 21, 18, 15, 12];
        let mut reports = Vec::new();

        let results = fetch_gradient(&source, query(), &minutes, &no_delay(), |d, t| {
            reports.push((d, t))
        })
        .await
        .unwrap();

        let contours: Vec<u64> = results
            .iter()
            .map(|fc| fc.features[0].get_property("contour").unwrap().as_u64().unwrap())
            .collect();
        assert_eq!(contours, vec![30, 27, 24, 21, 18, 15, 12]);
        assert_eq!(reports, vec![(3, 7), (6, 7), (7, 7)]);
        assert_eq!(source.calls.lock().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn failure_stops_later_batches() {
        let source = Recorder {
            fail_on: Some(24),
            ..Default::default()
        };
        let minutes = [30, 27, 24, 21, 18, 15];

        let err = fetch_gradient(&source, query(), &minutes, &no_delay(), |_, _| {})
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(429));

        let calls = source.calls.lock().unwrap();
        assert!(calls.iter().all(|m| [30, 27, 24].contains(m)));
    }

    #[tokio::test(start_paused = true)]
    async fn pauses_between_batches_only() {
        let source = Recorder::default();
        let minutes = [30, 27, 24, 21, 18, 15];
        let started = tokio::time::Instant::now();

        fetch_gradient(&source, query(), &minutes, &GradientOptions::default(), |_, _| {})
            .await
            .unwrap();

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(250), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(500), "{elapsed:?}");
    }

    #[tokio::test]
    async fn empty_threshold_list_fetches_nothing() {
        let source = Recorder::default();
        let results = fetch_gradient(&source, query(), &[], &no_delay(), |_, _| {
            panic!("no batch expected")
        })
        .await
        .unwrap();
        assert!(results.is_empty());
    }
}
