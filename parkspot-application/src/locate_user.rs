use super::*;
use gateways::geolocation::GeoLocationGateway;

/// Request the current position once and store it.
///
/// On failure the store is left untouched, i.e. the views keep
/// showing all spots without a marker for the user.
pub fn locate_user(store: &mut SpotStore, geo: &dyn GeoLocationGateway) -> Result<MapPoint> {
    let pos = geo.current_position().map_err(|err| {
        warn!("Error getting location: {err}");
        AppError::LocationUnavailable(err)
    })?;
    info!("Current location: {pos}");
    store.set_user_location(pos);
    Ok(pos)
}
