use crate::error::{MapstatsError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Kind of entry in the admission statistics feed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Course,
    Program,
    Other(String),
}

impl RecordKind {
    /// Map the feed's `typ` field onto a kind
    pub fn from_feed(value: &str) -> Self {
        match value {
            "kurs" => RecordKind::Course,
            "program" => RecordKind::Program,
            other => RecordKind::Other(other.to_string()),
        }
    }

    pub fn as_feed_str(&self) -> &str {
        match self {
            RecordKind::Course => "kurs",
            RecordKind::Program => "program",
            RecordKind::Other(other) => other,
        }
    }
}

impl<'de> Deserialize<'de> for RecordKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(RecordKind::from_feed(&value))
    }
}

impl Serialize for RecordKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_feed_str())
    }
}

/// One row of the admission statistics feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionRecord {
    #[serde(rename = "namn")]
    pub name: String,

    #[serde(rename = "typ")]
    pub kind: RecordKind,

    #[serde(rename = "antagna", deserialize_with = "deserialize_count")]
    pub admitted: i64,

    #[serde(rename = "reserver", deserialize_with = "deserialize_count")]
    pub waitlisted: i64,
}

impl AdmissionRecord {
    pub fn new(name: impl Into<String>, kind: RecordKind, admitted: i64, waitlisted: i64) -> Self {
        Self {
            name: name.into(),
            kind,
            admitted,
            waitlisted,
        }
    }

    /// Total number of applicants, admitted plus waitlisted
    pub fn demand_score(&self) -> i64 {
        self.admitted.saturating_add(self.waitlisted)
    }
}

/// A feed row as it arrives, before validation.
///
/// Only course and program rows are validated; rows of any other kind are
/// dropped without looking at their counts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedRow {
    #[serde(default)]
    pub typ: Option<String>,
    #[serde(default)]
    pub namn: Option<String>,
    #[serde(default)]
    pub antagna: Option<Value>,
    #[serde(default)]
    pub reserver: Option<Value>,
}

impl FeedRow {
    pub fn kind(&self) -> RecordKind {
        RecordKind::from_feed(self.typ.as_deref().unwrap_or_default())
    }

    /// Validate a course or program row.
    ///
    /// Returns `Ok(None)` for rows of other kinds. Missing or null counts
    /// are read as 0.
    pub fn into_record(self) -> Result<Option<AdmissionRecord>> {
        let kind = self.kind();
        if let RecordKind::Other(_) = kind {
            return Ok(None);
        }

        let name = self
            .namn
            .ok_or_else(|| MapstatsError::Parse("feed row has no 'namn'".to_string()))?;
        let admitted = count_from_value("antagna", self.antagna.as_ref())?;
        let waitlisted = count_from_value("reserver", self.reserver.as_ref())?;

        Ok(Some(AdmissionRecord::new(name, kind, admitted, waitlisted)))
    }
}

/// Read a count given as an integer, an integral float, or a numeric string
pub fn count_from_value(field: &str, value: Option<&Value>) -> Result<i64> {
    let invalid = || {
        let shown = value.unwrap_or(&Value::Null);
        MapstatsError::Parse(format!("invalid count for '{}': {}", field, shown))
    };

    match value {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(count) => Ok(count),
            None => number.as_f64().and_then(integral).ok_or_else(invalid),
        },
        Some(Value::String(text)) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(integral))
                .ok_or_else(invalid)
        }
        Some(_) => Err(invalid()),
    }
}

fn integral(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<i64, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    count_from_value("count", value.as_ref()).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_feed_row() {
        let json = r#"{"kod":"DT211G","typ":"kurs","namn":"Frontend","antagna":5,"reserver":1}"#;
        let record: AdmissionRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.name, "Frontend");
        assert_eq!(record.kind, RecordKind::Course);
        assert_eq!(record.admitted, 5);
        assert_eq!(record.waitlisted, 1);
        assert_eq!(record.demand_score(), 6);
    }

    #[test]
    fn test_numeric_string_counts() {
        let json = r#"{"typ":"program","namn":"Webbutveckling","antagna":"120","reserver":" 30 "}"#;
        let record: AdmissionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, RecordKind::Program);
        assert_eq!(record.demand_score(), 150);
    }

    #[test]
    fn test_unknown_kind_is_kept() {
        let json = r#"{"typ":"uppdrag","namn":"X","antagna":0,"reserver":0}"#;
        let record: AdmissionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, RecordKind::Other("uppdrag".to_string()));
    }

    #[test]
    fn test_invalid_count_is_rejected() {
        let json = r#"{"typ":"kurs","namn":"X","antagna":"many","reserver":0}"#;
        assert!(serde_json::from_str::<AdmissionRecord>(json).is_err());
    }

    #[test]
    fn test_null_and_float_counts() {
        let json = r#"{"typ":"kurs","namn":"X","antagna":5.0,"reserver":null}"#;
        let record: AdmissionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.admitted, 5);
        assert_eq!(record.waitlisted, 0);
    }

    #[test]
    fn test_fractional_count_is_rejected() {
        assert!(count_from_value("antagna", Some(&serde_json::json!(2.5))).is_err());
        assert!(count_from_value("antagna", Some(&serde_json::json!([1]))).is_err());
        assert_eq!(count_from_value("antagna", Some(&serde_json::json!("7.0"))).unwrap(), 7);
        assert_eq!(count_from_value("antagna", None).unwrap(), 0);
    }

    #[test]
    fn test_feed_row_of_other_kind_is_dropped() {
        let row: FeedRow = serde_json::from_str(r#"{"typ":"info","namn":"note"}"#).unwrap();
        assert_eq!(row.kind(), RecordKind::Other("info".to_string()));
        assert!(row.into_record().unwrap().is_none());

        let untyped: FeedRow = serde_json::from_str(r#"{"antagna":"lots"}"#).unwrap();
        assert!(untyped.into_record().unwrap().is_none());
    }

    #[test]
    fn test_feed_row_validation() {
        let row: FeedRow =
            serde_json::from_str(r#"{"typ":"program","namn":"C","antagna":"2"}"#).unwrap();
        let record = row.into_record().unwrap().unwrap();
        assert_eq!(record, AdmissionRecord::new("C", RecordKind::Program, 2, 0));

        let nameless: FeedRow = serde_json::from_str(r#"{"typ":"kurs","antagna":1}"#).unwrap();
        assert!(matches!(nameless.into_record(), Err(MapstatsError::Parse(_))));

        let bad_count: FeedRow =
            serde_json::from_str(r#"{"typ":"kurs","namn":"A","antagna":"many"}"#).unwrap();
        assert!(bad_count.into_record().is_err());
    }

    #[test]
    fn test_kind_round_trips_through_feed_names() {
        for typ in ["kurs", "program", "annat"] {
            assert_eq!(RecordKind::from_feed(typ).as_feed_str(), typ);
        }
    }
}
