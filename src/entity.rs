//! Entity contract definitions
//!
//! These traits define what the repository engine requires from a stored
//! value type. The engine treats payloads as opaque strings; serialization
//! is entirely the entity's concern.

use crate::error::StoreResult;
use std::fmt;
use std::str::FromStr;

/// Identifier contract for entity primary keys
///
/// An identifier must round-trip through its decimal string form: `Display`
/// renders the value the way it appears in record keys and the index payload,
/// and `FromStr` parses it back when the index is read. Any integer type
/// satisfies this automatically through the blanket impl.
pub trait EntityId: Clone + PartialEq + fmt::Display + FromStr
where
    <Self as FromStr>::Err: fmt::Display,
{
}

impl<T> EntityId for T
where
    T: Clone + PartialEq + fmt::Display + FromStr,
    <T as FromStr>::Err: fmt::Display,
{
}

/// Contract for types persisted by the repository
///
/// Implementations supply per-type metadata (table name, primary-key field
/// name), expose their own primary key, and convert themselves to and from a
/// string payload. The primary key may be absent (e.g. before first save);
/// write operations treat an absent key as "nothing to persist yet".
pub trait Entity: Sized
where
    <Self::Id as FromStr>::Err: fmt::Display,
{
    /// Primary key type
    type Id: EntityId;

    /// Stable table/collection name for this entity type
    fn table_name() -> &'static str;

    /// Name of the primary-key field for this entity type
    fn primary_key_name() -> &'static str;

    /// Current primary key value, if set
    fn id(&self) -> Option<Self::Id>;

    /// Serialize this entity to its string payload
    fn to_payload(&self) -> StoreResult<String>;

    /// Reconstruct an entity from a string payload
    fn from_payload(payload: &str) -> StoreResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sensor {
        id: Option<u32>,
        label: String,
    }

    impl Entity for Sensor {
        type Id = u32;

        fn table_name() -> &'static str {
            "Sensor"
        }

        fn primary_key_name() -> &'static str {
            "id"
        }

        fn id(&self) -> Option<u32> {
            self.id
        }

        fn to_payload(&self) -> StoreResult<String> {
            serde_json::to_string(self).map_err(|e| StoreError::SerializeFailed(e.to_string()))
        }

        fn from_payload(payload: &str) -> StoreResult<Self> {
            serde_json::from_str(payload).map_err(|e| StoreError::DeserializeFailed(e.to_string()))
        }
    }

    #[test]
    fn test_entity_metadata() {
        assert_eq!(Sensor::table_name(), "Sensor");
        assert_eq!(Sensor::primary_key_name(), "id");
    }

    #[test]
    fn test_entity_payload_round_trip() {
        let sensor = Sensor {
            id: Some(7),
            label: "thermo".to_string(),
        };

        let payload = sensor.to_payload().unwrap();
        let restored = Sensor::from_payload(&payload).unwrap();
        assert_eq!(restored, sensor);
    }

    #[test]
    fn test_entity_absent_id() {
        let sensor = Sensor {
            id: None,
            label: "unsaved".to_string(),
        };
        assert!(sensor.id().is_none());
    }

    #[test]
    fn test_entity_id_decimal_round_trip() {
        fn round_trip<I: EntityId>(id: I) -> I
        where
            <I as std::str::FromStr>::Err: std::fmt::Display + std::fmt::Debug,
        {
            id.to_string().parse().unwrap()
        }

        assert_eq!(round_trip(42u32), 42);
        assert_eq!(round_trip(-3i64), -3);
    }
}
