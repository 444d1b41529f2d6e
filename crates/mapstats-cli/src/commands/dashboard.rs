//! Dashboard command implementation

use crate::cli::DashboardArgs;
use crate::config_loader::load_config_with_overrides;
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::{DashboardOutput, RankingRow};
use crate::progress::fetch_spinner;
use crate::sinks::ChartFileSink;
use anyhow::Result;
use mapstats_dashboard::{Dashboard, DashboardOutcome, HttpStatsClient, RankingLimits};
use std::path::Path;
use std::sync::Arc;

pub async fn execute(args: DashboardArgs, output: &OutputWriter, config_path: Option<&Path>) -> Result<()> {
    let config = load_config_with_overrides(config_path, args.overrides())?;
    let settings = config.dashboard_settings();

    let client = HttpStatsClient::from_settings(&settings);
    let spinner = fetch_spinner(output, "Loading admission statistics...");
    let sink = Arc::new(ChartFileSink::new(*output, args.out).with_progress(spinner.clone()));

    let dashboard = Dashboard::new(client, sink.clone(), RankingLimits::from(&settings));
    let outcome = dashboard.load().await;
    spinner.finish_and_clear();

    let charts = match outcome {
        DashboardOutcome::Rendered(charts) => charts,
        DashboardOutcome::Failed(err) => {
            return Err(errors::dashboard_failed(&err, &settings.stats_endpoint).into());
        }
    };

    let courses = RankingRow::from_subset(&charts.courses);
    let programs = RankingRow::from_subset(&charts.programs);

    if output.is_json() {
        output.result(DashboardOutput {
            courses,
            programs,
            charts: sink.rendered(),
        })?;
    } else {
        output.section(format!("Most sought-after courses (top {})", settings.course_limit));
        output.table(courses);
        output.section(format!("Most sought-after programs (top {})", settings.program_limit));
        output.table(programs);
    }

    Ok(())
}
