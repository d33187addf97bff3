use itertools::Itertools;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(f64),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(f64),
    #[error("Failed to parse coordinate: {0}")]
    Parse(String),
}

/// Latitude in degrees, always within `[-90, 90]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!((Self::DEG_MIN..=Self::DEG_MAX).contains(&deg));
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        // NaN fails the range check
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// Longitude in degrees, always within `[-180, 180]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!((Self::DEG_MIN..=Self::DEG_MAX).contains(&deg));
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// A WGS-84 position on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Result<Self, CoordinateError> {
        let (lat, lng) = (lat.into(), lng.into());
        let lat = LatCoord::try_from_deg(lat).ok_or(CoordinateError::Latitude(lat))?;
        let lng = LngCoord::try_from_deg(lng).ok_or(CoordinateError::Longitude(lng))?;
        Ok(Self::new(lat, lng))
    }

    fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, CoordinateError> {
        let lat_deg = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|err| CoordinateError::Parse(format!("latitude '{lat_deg_str}': {err}")))?;
        let lng_deg = lng_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|err| CoordinateError::Parse(format!("longitude '{lng_deg_str}': {err}")))?;
        Self::try_from_lat_lng_deg(lat_deg, lng_deg)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() {
            MapPoint::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
        } else {
            Err(CoordinateError::Parse(s.to_string()))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn from_km(km: f64) -> Self {
        Self(km * 1_000.0)
    }

    pub fn to_km(self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

/// Kilometers with a single decimal, e.g. `0.8 km`.
impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:.1} km", self.to_km())
    }
}

pub const EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using the haversine formula.
    /// Reference: <https://en.wikipedia.org/wiki/Haversine_formula>
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        // The absolute deltas keep the result bitwise symmetric
        let dlat = (lat2_rad - lat1_rad).abs();
        let dlng = (lng2_rad - lng1_rad).abs();

        let dlat_sin = (dlat / 2.0).sin();
        let dlng_sin = (dlng / 2.0).sin();

        let a = dlat_sin * dlat_sin + lat1_rad.cos() * lat2_rad.cos() * dlng_sin * dlng_sin;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_meters(EARTH_RADIUS.to_meters() * c)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn latitude() {
        assert_eq!(LatCoord::min(), LatCoord::from_deg(-90));
        assert_eq!(LatCoord::max(), LatCoord::from_deg(90));
        assert_eq!(Some(LatCoord::max()), LatCoord::try_from_deg(90.0));
        assert_eq!(None, LatCoord::try_from_deg(-90.000001));
        assert_eq!(None, LatCoord::try_from_deg(90.000001));
        assert_eq!(None, LatCoord::try_from_deg(f64::NAN));
    }

    #[test]
    fn longitude() {
        assert_eq!(LngCoord::min(), LngCoord::from_deg(-180));
        assert_eq!(LngCoord::max(), LngCoord::from_deg(180));
        assert_eq!(None, LngCoord::try_from_deg(-180.000001));
        assert_eq!(None, LngCoord::try_from_deg(180.000001));
        assert_eq!(None, LngCoord::try_from_deg(f64::NAN));
    }

    #[test]
    fn reject_invalid_points() {
        assert_eq!(
            Err(CoordinateError::Latitude(91.0)),
            MapPoint::try_from_lat_lng_deg(91.0, 0.0)
        );
        assert_eq!(
            Err(CoordinateError::Longitude(-181.0)),
            MapPoint::try_from_lat_lng_deg(0.0, -181.0)
        );
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn parse_map_point() {
        let p: MapPoint = "51.5007,-0.1246".parse().unwrap();
        assert_eq!(p.to_lat_lng_deg(), (51.5007, -0.1246));
        assert_eq!(p.to_string(), "51.5007,-0.1246");
        assert!("51.5007".parse::<MapPoint>().is_err());
        assert!("x,0".parse::<MapPoint>().is_err());
        assert!("95,0".parse::<MapPoint>().is_err());
        assert!("1,2,3".parse::<MapPoint>().is_err());
    }

    #[test]
    fn no_distance() {
        let p1 = MapPoint::from_lat_lng_deg(0.0, 0.0);
        assert_eq!(MapPoint::distance(p1, p1).to_meters(), 0.0);

        let p2 = MapPoint::from_lat_lng_deg(-25.0, 55.0);
        assert_eq!(MapPoint::distance(p2, p2).to_meters(), 0.0);

        let p1 = MapPoint::from_lat_lng_deg(-15.0, -180.0);
        let p2 = MapPoint::from_lat_lng_deg(-15.0, 180.0);
        assert!(MapPoint::distance(p1, p2).to_meters() < 0.000001);
    }

    #[test]
    fn real_distance() {
        let stuttgart = MapPoint::from_lat_lng_deg(48.7755, 9.1827);
        let mannheim = MapPoint::from_lat_lng_deg(49.4836, 8.4630);
        assert!(MapPoint::distance(stuttgart, mannheim) > Distance::from_km(94.0));
        assert!(MapPoint::distance(stuttgart, mannheim) < Distance::from_km(95.0));

        let new_york = MapPoint::from_lat_lng_deg(40.714268, -74.005974);
        let sidney = MapPoint::from_lat_lng_deg(-33.867138, 151.207108);
        assert!(MapPoint::distance(new_york, sidney) > Distance::from_km(15_980.0));
        assert!(MapPoint::distance(new_york, sidney) < Distance::from_km(15_995.0));
    }

    #[test]
    fn distance_within_london() {
        let westminster = MapPoint::from_lat_lng_deg(51.5007, -0.1246);
        let trafalgar = MapPoint::from_lat_lng_deg(51.5074, -0.1278);
        let d = MapPoint::distance(westminster, trafalgar);
        assert!(d > Distance::from_km(0.7));
        assert!(d < Distance::from_km(0.85));
        assert_eq!(d.to_string(), "0.8 km");
    }

    #[test]
    fn symetric_distance() {
        let a = MapPoint::from_lat_lng_deg(80.0, 0.0);
        let b = MapPoint::from_lat_lng_deg(90.0, 20.0);
        assert_eq!(MapPoint::distance(a, b), MapPoint::distance(b, a));
    }

    #[test]
    fn format_distance() {
        assert_eq!(Distance::from_meters(0.0).to_string(), "0.0 km");
        assert_eq!(Distance::from_km(2.26).to_string(), "2.3 km");
        assert_eq!(Distance::from_km(10.0).to_string(), "10.0 km");
    }

    use rand::prelude::*;

    fn random_map_point<T: Rng>(rng: &mut T) -> MapPoint {
        let lat = rng.gen_range(LatCoord::min().to_deg()..=LatCoord::max().to_deg());
        let lng = rng.gen_range(LngCoord::min().to_deg()..=LngCoord::max().to_deg());
        MapPoint::from_lat_lng_deg(lat, lng)
    }

    #[test]
    fn random_distances_are_symetric_and_positive() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let p1 = random_map_point(&mut rng);
            let p2 = random_map_point(&mut rng);
            let d = MapPoint::distance(p1, p2);
            assert!(d.is_valid());
            assert!(d <= Distance::from_km(20_016.0));
            assert_eq!(d, MapPoint::distance(p2, p1));
            assert_eq!(MapPoint::distance(p1, p1).to_meters(), 0.0);
        }
    }
}
