use mapstats_core::models::ChartSpec;
use mapstats_core::ports::{ChartSink, StatsClient};
use mapstats_core::{MapstatsError, Result};

use crate::charts::{bar_chart, pie_chart};
use crate::ranking::{rank_feed, RankedSubset, RankingLimits};

/// Both charts derived from a single feed fetch
#[derive(Debug, Clone)]
pub struct DashboardCharts {
    pub courses: RankedSubset,
    pub programs: RankedSubset,
    pub bar: ChartSpec,
    pub pie: ChartSpec,
}

/// Result of loading the dashboard
#[derive(Debug)]
pub enum DashboardOutcome {
    /// Both charts were handed to the chart sink
    Rendered(DashboardCharts),
    /// Fetching or parsing the feed failed; nothing was rendered
    Failed(MapstatsError),
}

/// Admission dashboard: feed → rankings → bar and pie charts
pub struct Dashboard<S, C>
where
    S: StatsClient,
    C: ChartSink,
{
    client: S,
    sink: C,
    limits: RankingLimits,
}

impl<S, C> Dashboard<S, C>
where
    S: StatsClient,
    C: ChartSink,
{
    pub fn new(client: S, sink: C, limits: RankingLimits) -> Self {
        Self {
            client,
            sink,
            limits,
        }
    }

    /// Fetch the feed and derive both charts without rendering them
    pub async fn build(&self) -> Result<DashboardCharts> {
        let records = self.client.fetch().await?;
        tracing::debug!(count = records.len(), "Admission feed loaded");

        let (courses, programs) = rank_feed(records, self.limits);

        Ok(DashboardCharts {
            bar: bar_chart(&courses),
            pie: pie_chart(&programs),
            courses,
            programs,
        })
    }

    /// Load the dashboard and render both charts.
    ///
    /// Either both charts are rendered or, on any failure, neither is.
    pub async fn load(&self) -> DashboardOutcome {
        match self.build().await {
            Ok(charts) => {
                self.sink.render(&charts.bar);
                self.sink.render(&charts.pie);
                tracing::info!(
                    courses = charts.courses.len(),
                    programs = charts.programs.len(),
                    "Dashboard charts rendered"
                );
                DashboardOutcome::Rendered(charts)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to load admission statistics");
                DashboardOutcome::Failed(err)
            }
        }
    }
}
