use serde::Serialize;

/// A trimmed, non-empty search query together with its URL-safe form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedQuery {
    /// The query text after trimming
    pub text: String,

    /// Percent-encoded text, ready to be placed in a query parameter
    pub encoded: String,
}

/// Everything a map view needs to show a single place
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewParameters {
    /// Bounding box as `west,south,east,north`
    pub embed_bounding_box: String,

    /// Marker position as (latitude, longitude)
    pub marker: (f64, f64),

    /// Embeddable map URL with bounding box, layer and marker
    pub embed_url: String,

    /// Link to the full map site centered on the marker
    pub permalink: String,

    /// Human-readable name of the place, when the geocoder provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_name: Option<String>,
}

impl ViewParameters {
    pub fn latitude(&self) -> f64 {
        self.marker.0
    }

    pub fn longitude(&self) -> f64 {
        self.marker.1
    }
}
