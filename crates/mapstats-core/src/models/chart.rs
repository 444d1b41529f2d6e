use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Chart types produced by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

/// Presentation options passed to the charting engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: bool,
}

/// A single data series ready to be drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    /// Series label shown in legends and tooltips
    pub label: String,

    /// Category labels, in ranked order
    pub labels: Vec<String>,

    /// One value per label
    pub values: Vec<i64>,

    /// Fill color per entry
    pub colors: Vec<String>,

    pub border_color: Option<String>,
    pub border_width: Option<u32>,
}

impl ChartDataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A chart bound to a named rendering surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub surface: String,
    pub dataset: ChartDataset,
    pub options: ChartOptions,
}

impl ChartSpec {
    /// Build the Chart.js configuration object for this chart
    pub fn chartjs_config(&self) -> Value {
        let mut dataset = Map::new();
        dataset.insert("label".to_string(), json!(self.dataset.label));
        dataset.insert("data".to_string(), json!(self.dataset.values));

        // Bar charts share one fill color across all bars
        let background = match self.kind {
            ChartKind::Bar => match self.dataset.colors.first() {
                Some(color) => json!(color),
                None => Value::Null,
            },
            ChartKind::Pie => json!(self.dataset.colors),
        };
        dataset.insert("backgroundColor".to_string(), background);

        if let Some(ref border) = self.dataset.border_color {
            dataset.insert("borderColor".to_string(), json!(border));
        }
        if let Some(width) = self.dataset.border_width {
            dataset.insert("borderWidth".to_string(), json!(width));
        }

        let mut config = json!({
            "type": self.kind,
            "data": {
                "labels": self.dataset.labels,
                "datasets": [Value::Object(dataset)],
            },
        });

        if self.options.responsive {
            config["options"] = json!({ "responsive": true });
        }

        config
    }
}
