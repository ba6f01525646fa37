use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geo::Coordinate;

pub const ACK_MESSAGE: &str = "Location received successfully";

/// Body of a location submission
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationPayload {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationPayload {
    /// Validates the payload back into a coordinate
    pub fn coordinate(&self) -> Result<Coordinate> {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl From<Coordinate> for LocationPayload {
    fn from(coord: Coordinate) -> Self {
        Self {
            latitude: coord.latitude(),
            longitude: coord.longitude(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_shape() {
        let coord = Coordinate::new(40.0, -73.0).unwrap();
        let json = serde_json::to_value(LocationPayload::from(coord)).unwrap();
        assert_eq!(json, serde_json::json!({ "latitude": 40.0, "longitude": -73.0 }));
    }

    #[test]
    fn test_payload_survives_the_wire() {
        let coord = Coordinate::new(-33.868820, 151.209296).unwrap();
        let text = serde_json::to_string(&LocationPayload::from(coord)).unwrap();
        let back: LocationPayload = serde_json::from_str(&text).unwrap();
        assert_eq!(back.coordinate().unwrap(), coord);
    }

    #[test]
    fn test_missing_field_rejected() {
        assert!(serde_json::from_str::<LocationPayload>(r#"{"latitude": 1.0}"#).is_err());
    }

    #[test]
    fn test_ack_message_defaults() {
        let ack: Acknowledgement = serde_json::from_str("{}").unwrap();
        assert_eq!(ack.message, "");
    }
}
