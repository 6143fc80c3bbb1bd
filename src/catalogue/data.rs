/// Shared data structures for the catalogue
///
/// These structs represent the data model that flows between
/// the catalogue file and the UI layer.

use serde::{Deserialize, Deserializer};

/// One tree in the catalogue
///
/// Only `id`, `name`, `species` and `style` are guaranteed present.
/// Everything else is optional in the data file; absent values render
/// as a placeholder dash, never as an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreeRecord {
    /// Unique identifier. The data file may store it as a number or a
    /// string; it is always compared as a string.
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    /// Display name (e.g., "Sam")
    pub name: String,
    /// Species display string (e.g., "Juniper")
    pub species: String,
    /// Styling display string (e.g., "Informal Upright")
    pub style: String,
    /// Approximate age. Zero means the same as absent: unknown.
    #[serde(default)]
    pub age_years: Option<f64>,
    /// Height in centimeters. Zero means the same as absent: unknown.
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Free-text pot description
    #[serde(default)]
    pub pot: Option<String>,
    /// Free-text notes, included in the search haystack
    #[serde(default)]
    pub notes: Option<String>,
    /// Ordered photo paths, relative to the working directory
    #[serde(default)]
    pub photos: Vec<String>,
    /// Care schedule, when one has been recorded
    #[serde(default)]
    pub care: Option<CareSchedule>,
}

/// The fixed-key care schedule shown as a table on the detail screen
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CareSchedule {
    #[serde(default)]
    pub watering: Option<String>,
    #[serde(default)]
    pub pruning: Option<String>,
    #[serde(default)]
    pub wiring: Option<String>,
    #[serde(default)]
    pub repotting: Option<String>,
    #[serde(default)]
    pub substrate: Option<String>,
}

/// Accept a JSON string or number as the record id, normalizing to String
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "record id must be a string or number, got {}",
            other
        ))),
    }
}

/// Locate the first record whose id matches the requested id
pub fn find_by_id<'a>(catalogue: &'a [TreeRecord], id: &str) -> Option<&'a TreeRecord> {
    catalogue.iter().find(|record| record.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_becomes_string() {
        let record: TreeRecord = serde_json::from_str(
            r#"{"id": 7, "name": "Sam", "species": "Juniper", "style": "Informal"}"#,
        )
        .unwrap();

        assert_eq!(record.id, "7");
    }

    #[test]
    fn test_string_id_stays_verbatim() {
        let record: TreeRecord = serde_json::from_str(
            r#"{"id": "jun-01", "name": "Sam", "species": "Juniper", "style": "Informal"}"#,
        )
        .unwrap();

        assert_eq!(record.id, "jun-01");
    }

    #[test]
    fn test_optional_fields_default_to_unknown() {
        let record: TreeRecord = serde_json::from_str(
            r#"{"id": "1", "name": "Sam", "species": "Juniper", "style": "Informal"}"#,
        )
        .unwrap();

        assert_eq!(record.age_years, None);
        assert_eq!(record.height_cm, None);
        assert_eq!(record.pot, None);
        assert_eq!(record.notes, None);
        assert!(record.photos.is_empty());
        assert_eq!(record.care, None);
    }

    #[test]
    fn test_partial_care_schedule() {
        let record: TreeRecord = serde_json::from_str(
            r#"{
                "id": "1", "name": "Sam", "species": "Juniper", "style": "Informal",
                "care": {"watering": "Daily in summer"}
            }"#,
        )
        .unwrap();

        let care = record.care.unwrap();
        assert_eq!(care.watering.as_deref(), Some("Daily in summer"));
        assert_eq!(care.pruning, None);
        assert_eq!(care.substrate, None);
    }

    #[test]
    fn test_find_by_id() {
        let catalogue: Vec<TreeRecord> = serde_json::from_str(
            r#"[{"id": 1, "name": "Sam", "species": "Juniper", "style": "Informal"}]"#,
        )
        .unwrap();

        assert_eq!(find_by_id(&catalogue, "1").unwrap().name, "Sam");
        assert!(find_by_id(&catalogue, "99").is_none());
    }
}
