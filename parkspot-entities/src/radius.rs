use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::geo::Distance;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("Unsupported distance selection: {0} km")]
pub struct InvalidDistanceSelection(pub f64);

/// The search radii a user can choose from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DistanceThreshold {
    #[default]
    Km1,
    Km2,
    Km3,
    Km10,
}

impl DistanceThreshold {
    /// All options in ascending order.
    pub const ALL: [Self; 4] = [Self::Km1, Self::Km2, Self::Km3, Self::Km10];

    pub const fn km(self) -> u8 {
        match self {
            Self::Km1 => 1,
            Self::Km2 => 2,
            Self::Km3 => 3,
            Self::Km10 => 10,
        }
    }

    pub fn distance(self) -> Distance {
        Distance::from_km(f64::from(self.km()))
    }
}

impl fmt::Display for DistanceThreshold {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} km", self.km())
    }
}

impl TryFrom<f64> for DistanceThreshold {
    type Error = InvalidDistanceSelection;

    fn try_from(km: f64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| f64::from(t.km()) == km)
            .ok_or(InvalidDistanceSelection(km))
    }
}

impl FromStr for DistanceThreshold {
    type Err = InvalidDistanceSelection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix("km").unwrap_or(s).trim_end();
        let km = s.parse::<f64>().map_err(|_| InvalidDistanceSelection(f64::NAN))?;
        Self::try_from(km)
    }
}

impl From<DistanceThreshold> for Distance {
    fn from(from: DistanceThreshold) -> Self {
        from.distance()
    }
}
