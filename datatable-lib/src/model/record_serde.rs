//! Custom serialization for Record.
//!
//! Records serialize as a JSON object with fields in insertion order. Only
//! the fields a record holds are written, so a column the source lacked is
//! absent from the output while an explicit `null` stays `null`.
//!
//! Deserialization accepts any JSON object. Strings and numbers map to their
//! `Value` variants, `null` to `Value::Null`, everything else is kept as
//! `Value::Json`.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map representing a table record")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut record = Record::with_capacity(map.size_hint().unwrap_or(0));

        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;
            record.insert(key, Value::from(value));
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_product() {
        let json = r#"{
            "id": 1,
            "title": "iPhone 9",
            "price": 549,
            "discountPercentage": 12.96,
            "brand": null,
            "tags": ["phone"]
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();

        let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["id", "title", "price", "discountPercentage", "brand", "tags"]
        );
        assert_eq!(record.get("title").and_then(Value::as_str), Some("iPhone 9"));
        assert_eq!(
            record.get("discountPercentage").and_then(Value::as_f64),
            Some(12.96)
        );
        assert!(record.get("brand").unwrap().is_null());
        assert_eq!(record.get("tags").unwrap().type_name(), "json");
    }

    #[test]
    fn test_serialize_keeps_order() {
        let record = Record::new()
            .set("id", 3)
            .set("price", 10.5)
            .set("title", "Lamp");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":3,"price":10.5,"title":"Lamp"}"#);
    }

    #[test]
    fn test_explicit_null_survives_round_trip() {
        let record: Record =
            serde_json::from_str(r#"{"id":1,"brand":null,"title":"Lamp"}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"id":1,"brand":null,"title":"Lamp"}"#
        );
    }

    #[test]
    fn test_integers_stay_integers() {
        let record: Record = serde_json::from_str(r#"{"id":7,"stock":94}"#).unwrap();
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"id":7,"stock":94}"#);
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(serde_json::from_str::<Record>("[1,2]").is_err());
    }
}
