use super::prelude::*;
use crate::util::validate::Validate;
use std::time::Duration;

pub const DEFAULT_SPOT_LIFETIME: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Clone, Default)]
pub struct NewSpot {
    pub size: SpotSize,
    pub is_accessible: bool,
}

/// Offer the current location of the user as a free spot.
pub fn unpark(
    store: &mut SpotStore,
    user_id: &Id,
    new_spot: NewSpot,
    now: Timestamp,
    lifetime: Duration,
) -> Result<ParkingSpot> {
    let pos = store.user_location().ok_or(Error::LocationUnavailable)?;
    if lifetime.is_zero() {
        return Err(Error::InvalidLifetime);
    }
    let expires_at = now
        .checked_add(lifetime)
        .ok_or(Error::InvalidLifetime)?;
    let NewSpot {
        size,
        is_accessible,
    } = new_spot;
    let spot = ParkingSpot {
        id: Id::new(),
        pos,
        size,
        is_accessible,
        created_at: now,
        expires_at,
        user_id: user_id.clone(),
    };
    spot.validate()?;
    log::info!(
        "User {} unparked at {} ({} spot, expires at {})",
        spot.user_id,
        spot.pos,
        spot.size,
        spot.expires_at
    );
    store.add_spot(spot.clone());
    Ok(spot)
}
