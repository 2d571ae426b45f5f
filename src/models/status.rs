// src/models/status.rs

//! Status records as returned by the remote status service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Live busyness status for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Location id, expected to match a registry entry
    #[serde(rename = "locationid")]
    pub location_id: i64,

    /// Location name as known by the service (not authoritative)
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub name: String,

    /// Mean of recent crowd-level reports, `None` when nobody reported
    #[serde(
        rename = "statusaverage",
        default,
        deserialize_with = "deserialize_average"
    )]
    pub status_average: Option<f64>,

    /// Maximum capacity of the location
    #[serde(
        rename = "maxcapacity",
        default,
        deserialize_with = "deserialize_or_default"
    )]
    pub max_capacity: i64,
}

/// Reads `null` as the type's default instead of failing the whole response.
fn deserialize_or_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a number, a numeric string, or null.
///
/// SQL `AVG` columns reach JSON as strings through some drivers. Strings that
/// do not parse as a number are treated as "no reports".
fn deserialize_average<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Average {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Average>::deserialize(deserializer)? {
        Some(Average::Number(value)) => Some(value),
        Some(Average::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    })
}

/// Records received from a single fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// When the response was received
    pub fetched_at: DateTime<Utc>,

    /// Records in the order the service sent them
    pub records: Vec<StatusRecord>,
}

impl StatusSnapshot {
    pub fn new(records: Vec<StatusRecord>) -> Self {
        Self {
            fetched_at: Utc::now(),
            records,
        }
    }

    /// Decode a response body. The body must be a JSON array.
    pub fn from_json(body: &str) -> crate::error::Result<Self> {
        let records: Vec<StatusRecord> = serde_json::from_str(body)?;
        Ok(Self::new(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wire_names() {
        let body = r#"[
            {"locationid": 1, "name": "Commons Dining Hall", "statusaverage": 1.5, "maxcapacity": 400},
            {"locationid": 4, "name": "Johnny's", "statusaverage": null, "maxcapacity": 60}
        ]"#;

        let snapshot = StatusSnapshot::from_json(body).unwrap();
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.records[0].location_id, 1);
        assert_eq!(snapshot.records[0].status_average, Some(1.5));
        assert_eq!(snapshot.records[0].max_capacity, 400);
        assert_eq!(snapshot.records[1].status_average, None);
    }

    #[test]
    fn test_decode_string_average() {
        let body = r#"[
            {"locationid": 2, "name": "Knollcrest", "statusaverage": "2.6666666666666667", "maxcapacity": 500},
            {"locationid": 3, "name": "Uppercrust", "statusaverage": "n/a", "maxcapacity": 80}
        ]"#;

        let snapshot = StatusSnapshot::from_json(body).unwrap();
        let average = snapshot.records[0].status_average.unwrap();
        assert!((average - 2.6666666666666667).abs() < 1e-12);
        assert_eq!(snapshot.records[1].status_average, None);
    }

    #[test]
    fn test_decode_missing_optional_fields() {
        let snapshot = StatusSnapshot::from_json(r#"[{"locationid": 5}]"#).unwrap();
        let record = &snapshot.records[0];
        assert_eq!(record.name, "");
        assert_eq!(record.status_average, None);
        assert_eq!(record.max_capacity, 0);
    }

    #[test]
    fn test_decode_null_name_and_capacity() {
        let body = r#"[
            {"locationid": 1, "name": "Commons Dining Hall", "statusaverage": 0.5, "maxcapacity": 400},
            {"locationid": 2, "name": null, "statusaverage": 2.5, "maxcapacity": null}
        ]"#;

        let snapshot = StatusSnapshot::from_json(body).unwrap();
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.records[0].max_capacity, 400);

        let record = &snapshot.records[1];
        assert_eq!(record.location_id, 2);
        assert_eq!(record.name, "");
        assert_eq!(record.status_average, Some(2.5));
        assert_eq!(record.max_capacity, 0);
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(StatusSnapshot::from_json(r#"{"locationid": 1}"#).is_err());
        assert!(StatusSnapshot::from_json("<html>Application Error</html>").is_err());
    }
}
