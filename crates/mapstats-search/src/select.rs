use mapstats_core::models::RawPlace;

/// Pick the canonical match from a geocoding response.
///
/// The geocoder ranks results by relevance, so the first entry wins.
pub fn select_place(places: &[RawPlace]) -> Option<&RawPlace> {
    places.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(lat: &str) -> RawPlace {
        RawPlace {
            lat: lat.to_string(),
            lon: "0".to_string(),
            boundingbox: vec!["0".into(), "0".into(), "0".into(), "0".into()],
            display_name: None,
        }
    }

    #[test]
    fn test_selects_first() {
        let places = vec![place("1"), place("2"), place("3")];
        assert_eq!(select_place(&places).unwrap().lat, "1");
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(select_place(&[place("7")]).unwrap().lat, "7");
        assert!(select_place(&[]).is_none());
    }
}
