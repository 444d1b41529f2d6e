use mapstats_core::models::{AdmissionRecord, ChartKind, ViewParameters};
use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

/// Output for search command
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub place_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub bbox: String,
    pub embed_url: String,
    pub permalink: String,
}

impl From<&ViewParameters> for SearchOutput {
    fn from(view: &ViewParameters) -> Self {
        Self {
            place_name: view.place_name.clone(),
            latitude: view.latitude(),
            longitude: view.longitude(),
            bbox: view.embed_bounding_box.clone(),
            embed_url: view.embed_url.clone(),
            permalink: view.permalink.clone(),
        }
    }
}

/// One row of a ranking table
#[derive(Debug, Serialize, Tabled)]
pub struct RankingRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Admitted")]
    pub admitted: i64,
    #[tabled(rename = "Waitlisted")]
    pub waitlisted: i64,
    #[tabled(rename = "Total")]
    pub total: i64,
}

impl RankingRow {
    pub fn from_subset(records: &[AdmissionRecord]) -> Vec<Self> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| RankingRow {
                rank: i + 1,
                name: record.name.clone(),
                admitted: record.admitted,
                waitlisted: record.waitlisted,
                total: record.demand_score(),
            })
            .collect()
    }
}

/// A chart handed to the chart sink
#[derive(Debug, Clone, Serialize)]
pub struct ChartOutput {
    pub surface: String,
    pub kind: ChartKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub config: Value,
}

/// Output for dashboard command
#[derive(Debug, Serialize)]
pub struct DashboardOutput {
    pub courses: Vec<RankingRow>,
    pub programs: Vec<RankingRow>,
    pub charts: Vec<ChartOutput>,
}

/// One entry of the config command
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}
