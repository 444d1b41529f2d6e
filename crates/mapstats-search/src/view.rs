use mapstats_core::config::SearchSettings;
use mapstats_core::models::{GeocodeMatch, ViewParameters};

/// Tile layer requested from the map embed service
pub const MAP_LAYER: &str = "mapnik";

/// Derives embed and permalink URLs for a geocoded place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParameterBuilder {
    embed_endpoint: String,
    site_endpoint: String,
    zoom: u8,
}

impl ViewParameterBuilder {
    pub fn new(embed_endpoint: impl Into<String>, site_endpoint: impl Into<String>, zoom: u8) -> Self {
        Self {
            embed_endpoint: embed_endpoint.into(),
            site_endpoint: site_endpoint.into(),
            zoom,
        }
    }

    pub fn from_settings(settings: &SearchSettings) -> Self {
        Self::new(&settings.embed_endpoint, &settings.site_endpoint, settings.zoom)
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn build(&self, place: &GeocodeMatch) -> ViewParameters {
        let [west, south, east, north] = place.bounding_box.to_embed_order().map(unsigned_zero);
        let embed_bounding_box = format!("{},{},{},{}", west, south, east, north);

        let lat = unsigned_zero(place.latitude);
        let lon = unsigned_zero(place.longitude);

        let embed_url = format!(
            "{}?bbox={}&layer={}&marker={},{}",
            self.embed_endpoint, embed_bounding_box, MAP_LAYER, lat, lon
        );
        let permalink = format!(
            "{}/?mlat={}&mlon={}#map={}/{}/{}",
            self.site_endpoint.trim_end_matches('/'),
            lat,
            lon,
            self.zoom,
            lat,
            lon
        );

        ViewParameters {
            embed_bounding_box,
            marker: (lat, lon),
            embed_url,
            permalink,
            place_name: place.display_name.clone(),
        }
    }
}

/// `-0.0` prints as "-0"; URLs carry a plain "0"
fn unsigned_zero(value: f64) -> f64 {
    value + 0.0
}

impl Default for ViewParameterBuilder {
    fn default() -> Self {
        Self::from_settings(&SearchSettings::default())
    }
}
