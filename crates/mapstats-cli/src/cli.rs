use clap::{Parser, Subcommand};
use mapstats_core::config::CliConfigOverrides;
use std::path::PathBuf;

/// Mapstats - Place search and admission statistics
#[derive(Parser, Debug)]
#[command(name = "mapstats")]
#[command(about = "Place search with map views, and admission statistics charts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./mapstats.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a place and print its map view and permalink
    Search(SearchArgs),

    /// Load admission statistics and build the dashboard charts
    Dashboard(DashboardArgs),

    /// Show the effective configuration and where each value comes from
    Config,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Place to search for (prompts when omitted)
    pub query: Vec<String>,

    /// Interactive mode - keep prompting for searches until interrupted
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Geocoding endpoint
    #[arg(long, value_name = "URL")]
    pub geocode_endpoint: Option<String>,

    /// Map embed endpoint
    #[arg(long, value_name = "URL")]
    pub embed_endpoint: Option<String>,

    /// Map site used for permalinks
    #[arg(long, value_name = "URL")]
    pub site_endpoint: Option<String>,

    /// Zoom level of the permalink
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=19))]
    pub zoom: Option<u8>,
}

impl SearchArgs {
    /// The query words joined back into one string
    pub fn query_text(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }

    pub fn overrides(&self) -> CliConfigOverrides {
        CliConfigOverrides {
            geocode_endpoint: self.geocode_endpoint.clone(),
            embed_endpoint: self.embed_endpoint.clone(),
            site_endpoint: self.site_endpoint.clone(),
            zoom: self.zoom,
            ..Default::default()
        }
    }
}

#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Directory for the Chart.js configurations (printed when omitted)
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Statistics feed endpoint
    #[arg(long, value_name = "URL")]
    pub stats_endpoint: Option<String>,
}

impl DashboardArgs {
    pub fn overrides(&self) -> CliConfigOverrides {
        CliConfigOverrides {
            stats_endpoint: self.stats_endpoint.clone(),
            ..Default::default()
        }
    }
}
