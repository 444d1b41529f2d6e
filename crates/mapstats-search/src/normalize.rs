//! Query normalization and URL component encoding

use mapstats_core::models::NormalizedQuery;
use mapstats_core::{MapstatsError, Result};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is inside a URL component, the same set browsers
/// keep in `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Trim a raw query and encode it for use as a query parameter.
///
/// Returns `EmptyQuery` when nothing but whitespace was entered.
pub fn normalize_query(raw: &str) -> Result<NormalizedQuery> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(MapstatsError::EmptyQuery);
    }

    Ok(NormalizedQuery {
        text: text.to_string(),
        encoded: encode_component(text),
    })
}

/// Percent-encode every byte outside the unreserved component set
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Reverse of [`encode_component`]
pub fn decode_component(encoded: &str) -> Result<String> {
    percent_decode_str(encoded)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| MapstatsError::Parse(format!("Invalid percent-encoding: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_trims_whitespace() {
        let query = normalize_query("  Sundsvall \n").unwrap();
        assert_eq!(query.text, "Sundsvall");
        assert_eq!(query.encoded, "Sundsvall");
    }

    #[test]
    fn test_empty_and_blank_queries() {
        assert!(matches!(normalize_query(""), Err(MapstatsError::EmptyQuery)));
        assert!(matches!(normalize_query("   \t\n"), Err(MapstatsError::EmptyQuery)));
    }

    #[test]
    fn test_encodes_like_encode_uri_component() {
        assert_eq!(encode_component("Storgatan 1, Östersund"), "Storgatan%201%2C%20%C3%96stersund");
        assert_eq!(encode_component("a&b=c?d/e#f"), "a%26b%3Dc%3Fd%2Fe%23f");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("100% + more"), "100%25%20%2B%20more");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert!(decode_component("%FF%FE").is_err());
    }

    proptest! {
        #[test]
        fn prop_encoding_round_trips(raw in "\\PC*") {
            if let Ok(query) = normalize_query(&raw) {
                prop_assert_eq!(decode_component(&query.encoded).unwrap(), raw.trim());
            }
        }

        #[test]
        fn prop_encoded_form_is_url_safe(raw in "\\PC+") {
            let encoded = encode_component(&raw);
            prop_assert!(encoded.bytes().all(|b| b.is_ascii_alphanumeric()
                || b"-_.!~*'()%".contains(&b)));
        }
    }
}
