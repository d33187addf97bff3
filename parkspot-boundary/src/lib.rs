use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::SpotConversionError;

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum SpotSize {
    Small,
    Medium,
    Large,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpot {
    pub id            : String,
    pub latitude      : f64,
    pub longitude     : f64,
    pub size          : SpotSize,
    pub is_accessible : bool,
    /// Milliseconds since the Unix epoch
    pub created_at    : i64,
    /// Milliseconds since the Unix epoch
    pub expires_at    : i64,
    pub user_id       : String,
}

/// A spot as listed for the user, with its distance if the
/// user location is known.
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NearbySpot {
    #[serde(flatten)]
    pub spot: ParkingSpot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_spot_in_camel_case() {
        let spot = ParkingSpot {
            id: "1700000000000".into(),
            latitude: 51.5074,
            longitude: -0.1278,
            size: SpotSize::Medium,
            is_accessible: false,
            created_at: 1_700_000_000_000,
            expires_at: 1_700_001_800_000,
            user_id: "user-1".into(),
        };
        let json = serde_json::to_value(&spot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1700000000000",
                "latitude": 51.5074,
                "longitude": -0.1278,
                "size": "medium",
                "isAccessible": false,
                "createdAt": 1_700_000_000_000_i64,
                "expiresAt": 1_700_001_800_000_i64,
                "userId": "user-1"
            })
        );
        let parsed: ParkingSpot = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, spot);
    }

    #[test]
    fn nearby_spot_without_distance() {
        let json = r#"{
            "id": "a",
            "latitude": 1.0,
            "longitude": 2.0,
            "size": "small",
            "isAccessible": true,
            "createdAt": 0,
            "expiresAt": 1,
            "userId": "u"
        }"#;
        let nearby: NearbySpot = serde_json::from_str(json).unwrap();
        assert_eq!(nearby.distance_km, None);
        assert_eq!(nearby.spot.size, SpotSize::Small);
        let out = serde_json::to_value(&nearby).unwrap();
        assert!(out.get("distanceKm").is_none());
    }
}
