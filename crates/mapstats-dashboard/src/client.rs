use async_trait::async_trait;
use mapstats_core::config::DashboardSettings;
use mapstats_core::models::{AdmissionRecord, FeedRow};
use mapstats_core::ports::StatsClient;
use mapstats_core::{MapstatsError, Result};

/// Fetches the admission statistics feed over HTTP
pub struct HttpStatsClient {
    /// Feed URL (e.g., "https://studenter.miun.se/~mallar/dt211g/")
    endpoint: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpStatsClient {
    /// Create a new stats client for a feed URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self::new(&settings.stats_endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl StatsClient for HttpStatsClient {
    async fn fetch(&self) -> Result<Vec<AdmissionRecord>> {
        tracing::debug!(url = %self.endpoint, "Fetching admission statistics");

        let response = self.client.get(&self.endpoint).send().await.map_err(|e| {
            MapstatsError::Network(format!("Failed to reach statistics feed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MapstatsError::BadHttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MapstatsError::Network(format!("Failed to read statistics feed: {}", e)))?;

        parse_feed(&body)
    }
}

/// Parse a feed body, which must be a JSON array of objects.
///
/// Rows that are neither courses nor programs are dropped. A course or
/// program row with an unusable name or count is skipped with a warning
/// instead of failing the whole feed.
pub fn parse_feed(body: &str) -> Result<Vec<AdmissionRecord>> {
    let rows: Vec<FeedRow> = serde_json::from_str(body)
        .map_err(|e| MapstatsError::Parse(format!("Unexpected statistics feed: {}", e)))?;

    let records = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match row.into_record() {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(row = index, error = %e, "Skipping malformed feed row");
                None
            }
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapstats_core::models::RecordKind;

    #[test]
    fn test_parse_feed() {
        let body = r#"[
            {"typ":"kurs","namn":"A","antagna":5,"reserver":1},
            {"typ":"program","namn":"C","antagna":2,"reserver":0}
        ]"#;
        let records = parse_feed(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].kind, RecordKind::Program);
    }

    #[test]
    fn test_parse_feed_drops_rows_of_other_kinds() {
        let body = r#"[
            {"typ":"kurs","namn":"A","antagna":5,"reserver":1},
            {"typ":"info","namn":"note"},
            {"typ":"program","namn":"C","antagna":2,"reserver":0}
        ]"#;
        let records = parse_feed(body).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_parse_feed_tolerates_odd_counts() {
        let body = r#"[
            {"typ":"kurs","namn":"A","antagna":5.0,"reserver":null},
            {"typ":"kurs","namn":"B","antagna":"many","reserver":1},
            {"typ":"program","namn":"C","antagna":"3"}
        ]"#;
        let records = parse_feed(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "A");
        assert_eq!(records[0].demand_score(), 5);
        assert_eq!(records[1].name, "C");
        assert_eq!(records[1].demand_score(), 3);
    }

    #[test]
    fn test_parse_feed_rejects_non_array() {
        assert!(matches!(parse_feed(r#"{"error":"nope"}"#), Err(MapstatsError::Parse(_))));
        assert!(matches!(parse_feed("<html></html>"), Err(MapstatsError::Parse(_))));
    }

    #[test]
    fn test_client_from_settings() {
        let client = HttpStatsClient::from_settings(&DashboardSettings::default());
        assert_eq!(client.endpoint(), "https://studenter.miun.se/~mallar/dt211g/");
    }

    #[tokio::test]
    async fn test_unreachable_feed_is_network_error() {
        let client = HttpStatsClient::new("http://127.0.0.1:9/stats");
        assert!(matches!(client.fetch().await, Err(MapstatsError::Network(_))));
    }
}
