pub use parkspot_entities::builders::*;

use crate::{entities::*, store::SpotStore};
use url::Url;

pub fn t0() -> Timestamp {
    Timestamp::try_from_millis(1_700_000_000_000).unwrap()
}

pub fn westminster() -> MapPoint {
    MapPoint::from_lat_lng_deg(51.5007, -0.1246)
}

pub fn directions_base() -> Url {
    Url::parse("https://maps.example/dir").unwrap()
}

/// Two spots created at `t0`: one ~0.8 km and one ~4.4 km from Westminster.
pub fn london_store() -> SpotStore {
    SpotStore::with_spots(vec![
        ParkingSpot::build()
            .id("trafalgar")
            .pos(MapPoint::from_lat_lng_deg(51.5074, -0.1278))
            .created_at(t0())
            .finish(),
        ParkingSpot::build()
            .id("camden")
            .pos(MapPoint::from_lat_lng_deg(51.5390, -0.1426))
            .created_at(t0())
            .finish(),
    ])
}
