use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{geo::*, id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, AsRefStr)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SpotSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// A vacated parking spot, offered for a limited time.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSpot {
    pub id: Id,
    pub pos: MapPoint,
    pub size: SpotSize,
    pub is_accessible: bool,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub user_id: Id,
}

impl ParkingSpot {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }
}
