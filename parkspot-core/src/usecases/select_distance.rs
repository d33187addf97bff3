use super::prelude::*;

pub fn select_distance(store: &mut SpotStore, km: f64) -> Result<DistanceThreshold> {
    let threshold = DistanceThreshold::try_from(km).inspect_err(|err| {
        log::warn!("{err}");
    })?;
    store.set_distance_threshold(threshold);
    Ok(threshold)
}
