//! Mapstats Dashboard - Admission statistics charts
//!
//! Fetches the admission feed once and derives two charts from it: the most
//! demanded courses as a bar chart and the most demanded programs as a pie
//! chart.

pub mod charts;
pub mod client;
pub mod pipeline;
pub mod ranking;

pub use charts::{bar_chart, pie_chart, BAR_SURFACE, PIE_SURFACE};
pub use client::{parse_feed, HttpStatsClient};
pub use pipeline::{Dashboard, DashboardCharts, DashboardOutcome};
pub use ranking::{classify, rank, rank_feed, RankedSubset, RankingLimits};
