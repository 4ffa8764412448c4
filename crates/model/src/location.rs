use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ExampleData;

/// The last reported position of a nurse. The nurse identifier is the
/// storage key and not part of the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NurseLocation {
    pub lat: f64,
    pub lon: f64,
    /// Assigned by the store at write time, transmitted as milliseconds
    /// since the Unix epoch.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schemars(with = "i64")]
    pub timestamp: DateTime<Utc>,
}

impl NurseLocation {
    pub fn new(lat: f64, lon: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            lat,
            lon,
            timestamp,
        }
    }
}

impl ExampleData for NurseLocation {
    fn example_data() -> Self {
        Self {
            lat: 30.3165,
            lon: 78.0322,
            timestamp: DateTime::from_timestamp_millis(1_700_000_000_000)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_serializes_as_epoch_milliseconds() {
        let location = NurseLocation::example_data();
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["timestamp"], 1_700_000_000_000_i64);
        assert_eq!(json["lat"], 30.3165);
        assert_eq!(json["lon"], 78.0322);
    }
}
