use super::*;
use parkspot_entities as e;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpotConversionError {
    #[error(transparent)]
    Coordinate(#[from] e::geo::CoordinateError),
    #[error("Invalid timestamp: {0}")]
    Timestamp(i64),
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (latitude, longitude) = from.to_lat_lng_deg();
        Self {
            latitude,
            longitude,
        }
    }
}

impl TryFrom<Coordinate> for e::geo::MapPoint {
    type Error = e::geo::CoordinateError;

    fn try_from(from: Coordinate) -> Result<Self, Self::Error> {
        e::geo::MapPoint::try_from_lat_lng_deg(from.latitude, from.longitude)
    }
}

impl From<e::spot::SpotSize> for SpotSize {
    fn from(from: e::spot::SpotSize) -> Self {
        use e::spot::SpotSize as E;
        match from {
            E::Small => Self::Small,
            E::Medium => Self::Medium,
            E::Large => Self::Large,
        }
    }
}

impl From<SpotSize> for e::spot::SpotSize {
    fn from(from: SpotSize) -> Self {
        use SpotSize as B;
        match from {
            B::Small => Self::Small,
            B::Medium => Self::Medium,
            B::Large => Self::Large,
        }
    }
}

impl From<e::spot::ParkingSpot> for ParkingSpot {
    fn from(from: e::spot::ParkingSpot) -> Self {
        let e::spot::ParkingSpot {
            id,
            pos,
            size,
            is_accessible,
            created_at,
            expires_at,
            user_id,
        } = from;
        let (latitude, longitude) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            latitude,
            longitude,
            size: size.into(),
            is_accessible,
            created_at: created_at.as_millis(),
            expires_at: expires_at.as_millis(),
            user_id: user_id.into(),
        }
    }
}

impl TryFrom<ParkingSpot> for e::spot::ParkingSpot {
    type Error = SpotConversionError;

    fn try_from(from: ParkingSpot) -> Result<Self, Self::Error> {
        let ParkingSpot {
            id,
            latitude,
            longitude,
            size,
            is_accessible,
            created_at,
            expires_at,
            user_id,
        } = from;
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(latitude, longitude)?;
        let created_at = e::time::Timestamp::try_from_millis(created_at)
            .map_err(|_| SpotConversionError::Timestamp(created_at))?;
        let expires_at = e::time::Timestamp::try_from_millis(expires_at)
            .map_err(|_| SpotConversionError::Timestamp(expires_at))?;
        Ok(Self {
            id: id.into(),
            pos,
            size: size.into(),
            is_accessible,
            created_at,
            expires_at,
            user_id: user_id.into(),
        })
    }
}

impl NearbySpot {
    pub fn new(spot: &e::spot::ParkingSpot, distance: Option<e::geo::Distance>) -> Self {
        Self {
            spot: spot.clone().into(),
            distance_km: distance.map(e::geo::Distance::to_km),
        }
    }
}
