use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ExampleData;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// GeoJSON LineString: an ordered sequence of `[lon, lat]` pairs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LineString {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<[f64; 2]>,
}

impl LineString {
    pub fn new(coordinates: Vec<[f64; 2]>) -> Self {
        Self {
            kind: "LineString".to_owned(),
            coordinates,
        }
    }
}

/// An estimated route between two points. `distance` is in meters,
/// `duration` in whole seconds. `steps` is always empty; turn-by-turn
/// instructions only exist on the external provider path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteEstimate {
    pub distance: f64,
    pub duration: u64,
    pub geometry: LineString,
    pub steps: Vec<serde_json::Value>,
}

impl RouteEstimate {
    pub fn new(distance: f64, duration: u64, geometry: LineString) -> Self {
        Self {
            distance,
            duration,
            geometry,
            steps: vec![],
        }
    }
}

impl ExampleData for RouteEstimate {
    fn example_data() -> Self {
        Self::new(
            144_548.0,
            17_346,
            LineString::new(vec![[0.0, 0.0], [0.5, 0.0], [1.0, 0.0]]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_serializes_as_geojson_line_string() {
        let estimate = RouteEstimate::example_data();
        let json = serde_json::to_value(&estimate).unwrap();
        assert_eq!(json["geometry"]["type"], "LineString");
        assert_eq!(json["geometry"]["coordinates"][0][0], 0.0);
        assert_eq!(json["steps"].as_array().unwrap().len(), 0);
    }
}
