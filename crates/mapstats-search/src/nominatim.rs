use async_trait::async_trait;
use mapstats_core::config::SearchSettings;
use mapstats_core::models::{NormalizedQuery, RawPlace};
use mapstats_core::ports::GeocodeClient;
use mapstats_core::{MapstatsError, Result};
use reqwest::header::REFERER;

/// Nominatim geocoder adapter
pub struct NominatimClient {
    /// Search endpoint (e.g., "https://nominatim.openstreetmap.org/search")
    endpoint: String,

    /// Origin sent in the Referer header
    referer: String,

    /// HTTP client, carries the User-Agent
    client: reqwest::Client,
}

impl NominatimClient {
    /// Create a new Nominatim client.
    ///
    /// Nominatim's usage policy requires an identifying User-Agent and a
    /// Referer on every request.
    pub fn new(
        endpoint: impl Into<String>,
        user_agent: impl AsRef<str>,
        referer: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent.as_ref())
            .build()
            .map_err(|e| MapstatsError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            referer: referer.into(),
            client,
        })
    }

    pub fn from_settings(settings: &SearchSettings) -> Result<Self> {
        Self::new(&settings.geocode_endpoint, &settings.user_agent, &settings.referer)
    }

    /// Full request URL for a query
    pub fn request_url(&self, query: &NormalizedQuery) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}format=json&q={}", self.endpoint, separator, query.encoded)
    }
}

#[async_trait]
impl GeocodeClient for NominatimClient {
    async fn search(&self, query: &NormalizedQuery) -> Result<Vec<RawPlace>> {
        let url = self.request_url(query);
        tracing::debug!(url = %url, "Sending geocode request");

        let response = self
            .client
            .get(&url)
            .header(REFERER, self.referer.as_str())
            .send()
            .await
            .map_err(|e| {
                MapstatsError::Network(format!("Failed to reach geocoding service: {}", e))
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
            .map_err(|e| MapstatsError::Network(format!("Failed to read geocoding response: {}", e)))?;

        let places: Vec<RawPlace> = serde_json::from_str(&body)
            .map_err(|e| MapstatsError::Parse(format!("Unexpected geocoding response: {}", e)))?;

        tracing::debug!(count = places.len(), "Geocode request completed");
        Ok(places)
    }
}
