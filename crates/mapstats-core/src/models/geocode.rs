use serde::{Deserialize, Serialize};

use crate::error::{MapstatsError, Result};

/// One element of a Nominatim search response, exactly as sent on the wire.
///
/// Nominatim encodes every number as a string and orders the bounding box
/// as `[south, north, west, east]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPlace {
    pub lat: String,
    pub lon: String,
    pub boundingbox: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Geographic extent of a match in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Parse Nominatim's `[south, north, west, east]` string tuple
    pub fn from_nominatim(values: &[String]) -> Result<Self> {
        let [south, north, west, east] = values else {
            return Err(MapstatsError::InvalidCoordinate {
                field: "boundingbox".to_string(),
                value: format!("{:?}", values),
            });
        };

        Ok(Self {
            south: parse_degrees("boundingbox.south", south)?,
            north: parse_degrees("boundingbox.north", north)?,
            west: parse_degrees("boundingbox.west", west)?,
            east: parse_degrees("boundingbox.east", east)?,
        })
    }

    /// Corners in the `west,south,east,north` order used by map embeds
    pub fn to_embed_order(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

/// A geocoding result with its numeric fields parsed
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeMatch {
    pub latitude: f64,
    pub longitude: f64,
    pub bounding_box: BoundingBox,
    pub display_name: Option<String>,
}

impl GeocodeMatch {
    /// Parse the string fields of a raw place.
    ///
    /// Malformed numbers are rejected instead of being carried forward as NaN.
    pub fn parse(raw: &RawPlace) -> Result<Self> {
        Ok(Self {
            latitude: parse_degrees("lat", &raw.lat)?,
            longitude: parse_degrees("lon", &raw.lon)?,
            bounding_box: BoundingBox::from_nominatim(&raw.boundingbox)?,
            display_name: raw.display_name.clone(),
        })
    }
}

impl TryFrom<&RawPlace> for GeocodeMatch {
    type Error = MapstatsError;

    fn try_from(raw: &RawPlace) -> Result<Self> {
        Self::parse(raw)
    }
}

fn parse_degrees(field: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MapstatsError::InvalidCoordinate {
            field: field.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(lat: &str, lon: &str, bbox: &[&str]) -> RawPlace {
        RawPlace {
            lat: lat.to_string(),
            lon: lon.to_string(),
            boundingbox: bbox.iter().map(|s| s.to_string()).collect(),
            display_name: None,
        }
    }

    #[test]
    fn test_parse_valid_place() {
        let place = GeocodeMatch::parse(&raw(
            "62.3908",
            "17.3069",
            &["62.3", "62.5", "17.1", "17.5"],
        ))
        .unwrap();

        assert_eq!(place.latitude, 62.3908);
        assert_eq!(place.longitude, 17.3069);
        assert_eq!(place.bounding_box.south, 62.3);
        assert_eq!(place.bounding_box.north, 62.5);
        assert_eq!(place.bounding_box.west, 17.1);
        assert_eq!(place.bounding_box.east, 17.5);
    }

    #[test]
    fn test_embed_order() {
        let bbox = BoundingBox::from_nominatim(&[
            "10".to_string(),
            "20".to_string(),
            "30".to_string(),
            "40".to_string(),
        ])
        .unwrap();
        assert_eq!(bbox.to_embed_order(), [30.0, 10.0, 40.0, 20.0]);
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        let place = GeocodeMatch::parse(&raw(" 1.5 ", "2", &["0", "1", "2", "3"])).unwrap();
        assert_eq!(place.latitude, 1.5);
    }

    #[test]
    fn test_non_numeric_latitude_is_rejected() {
        let err = GeocodeMatch::parse(&raw("north", "2", &["0", "1", "2", "3"])).unwrap_err();
        match err {
            MapstatsError::InvalidCoordinate { field, value } => {
                assert_eq!(field, "lat");
                assert_eq!(value, "north");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        assert!(GeocodeMatch::parse(&raw("NaN", "2", &["0", "1", "2", "3"])).is_err());
        assert!(GeocodeMatch::parse(&raw("1", "inf", &["0", "1", "2", "3"])).is_err());
        assert!(GeocodeMatch::parse(&raw("", "2", &["0", "1", "2", "3"])).is_err());
    }

    #[test]
    fn test_short_bounding_box_is_rejected() {
        let err = GeocodeMatch::parse(&raw("1", "2", &["0", "1", "2"])).unwrap_err();
        assert!(matches!(
            err,
            MapstatsError::InvalidCoordinate { ref field, .. } if field == "boundingbox"
        ));
    }

    #[test]
    fn test_raw_place_ignores_extra_fields() {
        let json = r#"{
            "place_id": 1234,
            "lat": "59.3251172",
            "lon": "18.0710935",
            "boundingbox": ["59.1", "59.5", "17.8", "18.3"],
            "display_name": "Stockholm, Sverige",
            "importance": 0.8
        }"#;
        let place: RawPlace = serde_json::from_str(json).unwrap();
        assert_eq!(place.display_name.as_deref(), Some("Stockholm, Sverige"));
        assert_eq!(place.boundingbox.len(), 4);
    }
}
