//! Port trait definitions
//!
//! The pipelines only talk to the outside world through these traits:
//! two upstream clients that fetch data and the presentation surfaces that
//! receive the results.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{AdmissionRecord, ChartSpec, NormalizedQuery, RawPlace, ViewParameters};

/// Port for geocoding a free-text query
#[async_trait]
pub trait GeocodeClient: Send + Sync {
    /// Look up places matching the query, most relevant first.
    ///
    /// An empty vector means the service found nothing.
    async fn search(&self, query: &NormalizedQuery) -> Result<Vec<RawPlace>>;
}

/// Port for fetching the admission statistics feed
#[async_trait]
pub trait StatsClient: Send + Sync {
    async fn fetch(&self) -> Result<Vec<AdmissionRecord>>;
}

/// Surface that shows a map view and the link to the full map
pub trait ViewSink: Send + Sync {
    fn show(&self, view: &ViewParameters);
}

/// Surface that draws charts
pub trait ChartSink: Send + Sync {
    /// Draw a chart on the surface named by `chart.surface`
    fn render(&self, chart: &ChartSpec);
}

/// User-visible notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

#[async_trait]
impl<T: GeocodeClient + ?Sized> GeocodeClient for Arc<T> {
    async fn search(&self, query: &NormalizedQuery) -> Result<Vec<RawPlace>> {
        (**self).search(query).await
    }
}

#[async_trait]
impl<T: StatsClient + ?Sized> StatsClient for Arc<T> {
    async fn fetch(&self) -> Result<Vec<AdmissionRecord>> {
        (**self).fetch().await
    }
}

impl<T: ViewSink + ?Sized> ViewSink for Arc<T> {
    fn show(&self, view: &ViewParameters) {
        (**self).show(view)
    }
}

impl<T: ChartSink + ?Sized> ChartSink for Arc<T> {
    fn render(&self, chart: &ChartSpec) {
        (**self).render(chart)
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}
