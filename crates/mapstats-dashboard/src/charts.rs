//! Chart datasets built from ranked admission records

use mapstats_core::models::{AdmissionRecord, ChartDataset, ChartKind, ChartOptions, ChartSpec};

/// Surface receiving the course bar chart
pub const BAR_SURFACE: &str = "barChart";

/// Surface receiving the program pie chart
pub const PIE_SURFACE: &str = "pieChart";

/// Series label for both charts
pub const SERIES_LABEL: &str = "Total applicants";

pub const BAR_FILL: &str = "rgba(54, 162, 235, 0.6)";
pub const BAR_BORDER: &str = "rgba(54, 162, 235, 1)";

/// Qualitative palette for pie slices
pub const PIE_PALETTE: [&str; 5] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF"];

fn labels_and_values(records: &[AdmissionRecord]) -> (Vec<String>, Vec<i64>) {
    records
        .iter()
        .map(|record| (record.name.clone(), record.demand_score()))
        .unzip()
}

/// Dataset for a bar chart: one translucent blue for every bar
pub fn bar_dataset(records: &[AdmissionRecord]) -> ChartDataset {
    let (labels, values) = labels_and_values(records);

    ChartDataset {
        label: SERIES_LABEL.to_string(),
        colors: vec![BAR_FILL.to_string(); labels.len()],
        labels,
        values,
        border_color: Some(BAR_BORDER.to_string()),
        border_width: Some(1),
    }
}

/// Dataset for a pie chart: palette colors assigned by position, wrapping
/// around when there are more slices than colors
pub fn pie_dataset(records: &[AdmissionRecord]) -> ChartDataset {
    let (labels, values) = labels_and_values(records);

    ChartDataset {
        label: SERIES_LABEL.to_string(),
        colors: PIE_PALETTE.iter().cycle().take(labels.len()).map(|c| c.to_string()).collect(),
        labels,
        values,
        border_color: None,
        border_width: None,
    }
}

/// Responsive bar chart bound to the bar surface
pub fn bar_chart(records: &[AdmissionRecord]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        surface: BAR_SURFACE.to_string(),
        dataset: bar_dataset(records),
        options: ChartOptions { responsive: true },
    }
}

/// Pie chart bound to the pie surface
pub fn pie_chart(records: &[AdmissionRecord]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Pie,
        surface: PIE_SURFACE.to_string(),
        dataset: pie_dataset(records),
        options: ChartOptions::default(),
    }
}
