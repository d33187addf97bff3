use super::*;
use std::time::Duration;

/// Offer the current location of the logged in user as a free spot.
pub fn unpark(
    store: &mut SpotStore,
    session: &Session,
    new_spot: usecases::NewSpot,
    lifetime: Duration,
) -> Result<ParkingSpot> {
    let spot = usecases::unpark(store, &session.user_id, new_spot, Timestamp::now(), lifetime)
        .inspect_err(|err| warn!("Unable to unpark: {err}"))?;
    Ok(spot)
}
