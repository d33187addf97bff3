use super::*;
use gateways::navigation::UrlOpener;
use url::Url;

/// Select a spot and hand the directions over to an external planner.
///
/// Returns `None` if the user location is unknown, in which case
/// the spot is selected but nothing is opened.
pub fn open_directions(
    store: &mut SpotStore,
    spot_id: &str,
    directions_base_url: &Url,
    opener: &dyn UrlOpener,
) -> Result<Option<usecases::DirectionsLink>> {
    let link = usecases::select_spot(store, spot_id, directions_base_url)?;
    if let Some(link) = &link {
        opener.open(link.url()).map_err(|err| {
            error!("Failed to open directions to spot {spot_id}: {err}");
            AppError::Navigation(err)
        })?;
    }
    Ok(link)
}
