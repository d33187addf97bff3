use super::{prelude::*, DirectionsLink};
use url::Url;

/// Highlight a spot and, if the user location is known,
/// create a link with directions to it.
pub fn select_spot(
    store: &mut SpotStore,
    spot_id: &str,
    directions_base_url: &Url,
) -> Result<Option<DirectionsLink>> {
    let spot = store
        .state()
        .spot(spot_id)
        .cloned()
        .ok_or_else(|| Error::SpotNotFound(spot_id.to_string()))?;
    let link = store
        .user_location()
        .map(|origin| DirectionsLink::new(directions_base_url, origin, spot.pos))
        .transpose()?;
    if link.is_none() {
        log::debug!("No directions to spot {spot_id} without a known location");
    }
    store.set_selected_spot(Some(spot));
    Ok(link)
}

pub fn clear_selection(store: &mut SpotStore) {
    if store.selected_spot().is_some() {
        store.set_selected_spot(None);
    }
}
