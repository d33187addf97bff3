use crate::entities::*;

pub trait InRadius {
    fn in_radius(&self, origin: MapPoint, radius: Distance) -> bool;
}

impl InRadius for ParkingSpot {
    fn in_radius(&self, origin: MapPoint, radius: Distance) -> bool {
        MapPoint::distance(origin, self.pos) <= radius
    }
}

/// Select all spots within `radius` around `origin`.
///
/// Without an origin nothing is filtered. The relative order
/// of the spots is preserved.
pub fn filter_by_radius<'a, I>(
    spots: I,
    origin: Option<MapPoint>,
    radius: Distance,
) -> Vec<&'a ParkingSpot>
where
    I: IntoIterator<Item = &'a ParkingSpot>,
{
    let spots = spots.into_iter();
    match origin {
        Some(origin) => spots.filter(|s| s.in_radius(origin, radius)).collect(),
        None => spots.collect(),
    }
}

/// A visible spot together with its distance to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbySpot<'a> {
    pub spot: &'a ParkingSpot,
    pub distance: Option<Distance>,
}

pub fn nearby_spots<'a, I>(
    spots: I,
    origin: Option<MapPoint>,
    radius: Distance,
) -> Vec<NearbySpot<'a>>
where
    I: IntoIterator<Item = &'a ParkingSpot>,
{
    filter_by_radius(spots, origin, radius)
        .into_iter()
        .map(|spot| NearbySpot {
            spot,
            distance: origin.map(|origin| MapPoint::distance(origin, spot.pos)),
        })
        .collect()
}

#[cfg(test)]
mod tests {

    use parkspot_entities::builders::*;

    use super::*;

    fn westminster() -> MapPoint {
        MapPoint::from_lat_lng_deg(51.5007, -0.1246)
    }

    fn spots() -> Vec<ParkingSpot> {
        vec![
            // ~0.8 km
            ParkingSpot::build()
                .id("trafalgar")
                .pos(MapPoint::from_lat_lng_deg(51.5074, -0.1278))
                .finish(),
            // ~4.4 km
            ParkingSpot::build()
                .id("camden")
                .pos(MapPoint::from_lat_lng_deg(51.5390, -0.1426))
                .finish(),
            // ~0.2 km
            ParkingSpot::build()
                .id("parliament-square")
                .pos(MapPoint::from_lat_lng_deg(51.5010, -0.1276))
                .finish(),
            // ~340 km
            ParkingSpot::build()
                .id("paris")
                .pos(MapPoint::from_lat_lng_deg(48.8566, 2.3522))
                .finish(),
        ]
    }

    fn ids(spots: &[&ParkingSpot]) -> Vec<String> {
        spots.iter().map(|s| s.id.to_string()).collect()
    }

    #[test]
    fn is_in_radius() {
        let spot = ParkingSpot::build()
            .pos(MapPoint::from_lat_lng_deg(51.5074, -0.1278))
            .finish();
        assert!(spot.in_radius(westminster(), Distance::from_km(1.0)));
        assert!(!spot.in_radius(westminster(), Distance::from_km(0.5)));
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        let spot = ParkingSpot::build().pos(westminster()).finish();
        assert!(spot.in_radius(westminster(), Distance::from_meters(0.0)));
    }

    #[test]
    fn filter_keeps_order() {
        let spots = spots();
        let filtered = filter_by_radius(&spots, Some(westminster()), Distance::from_km(1.0));
        assert_eq!(ids(&filtered), vec!["trafalgar", "parliament-square"]);
        let filtered = filter_by_radius(&spots, Some(westminster()), Distance::from_km(10.0));
        assert_eq!(ids(&filtered), vec!["trafalgar", "camden", "parliament-square"]);
    }

    #[test]
    fn no_origin_means_no_filtering() {
        let spots = spots();
        for radius in [0.0, 1.0, 10.0] {
            let filtered = filter_by_radius(&spots, None, Distance::from_km(radius));
            assert_eq!(filtered.len(), spots.len());
            assert!(filtered.iter().zip(&spots).all(|(a, b)| *a == b));
        }
    }

    #[test]
    fn larger_radius_yields_superset() {
        let spots = spots();
        let origin = Some(westminster());
        for pair in DistanceThreshold::ALL.windows(2) {
            let small = filter_by_radius(&spots, origin, pair[0].distance());
            let large = filter_by_radius(&spots, origin, pair[1].distance());
            assert!(small.iter().all(|s| large.contains(s)));
        }
    }

    #[test]
    fn nearby_spots_with_distances() {
        let spots = spots();
        let nearby = nearby_spots(&spots, Some(westminster()), Distance::from_km(1.0));
        assert_eq!(nearby.len(), 2);
        assert_eq!(nearby[0].distance.unwrap().to_string(), "0.8 km");
        assert_eq!(nearby[1].distance.unwrap().to_string(), "0.2 km");

        let nearby = nearby_spots(&spots, None, Distance::from_km(1.0));
        assert_eq!(nearby.len(), 4);
        assert!(nearby.iter().all(|n| n.distance.is_none()));
    }
}
