use anyhow::{Context as _, Result};
use parkspot_boundary as json;
use parkspot_core::{entities::ParkingSpot, util::validate::Validate};
use std::{fs, io::ErrorKind, path::Path};

/// Read all spots from a JSON file.
///
/// A missing file is treated like an empty list.
pub fn load(path: &Path) -> Result<Vec<ParkingSpot>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("{} not found => start without spots", path.display());
            return Ok(vec![]);
        }
        Err(err) => return Err(err.into()),
    };
    let spots: Vec<json::ParkingSpot> = serde_json::from_str(&content)?;
    let spots = spots
        .into_iter()
        .enumerate()
        .map(|(index, spot)| {
            try_into_valid_spot(spot)
                .with_context(|| format!("Invalid spot #{index} in {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    log::debug!("Loaded {} spots from {}", spots.len(), path.display());
    Ok(spots)
}

fn try_into_valid_spot(spot: json::ParkingSpot) -> Result<ParkingSpot> {
    let spot = ParkingSpot::try_from(spot)?;
    spot.validate()?;
    Ok(spot)
}

pub fn save(path: &Path, spots: &[ParkingSpot]) -> Result<()> {
    let spots: Vec<_> = spots.iter().cloned().map(json::ParkingSpot::from).collect();
    let content = serde_json::to_string_pretty(&spots)?;
    fs::write(path, content)?;
    log::debug!("Saved {} spots to {}", spots.len(), path.display());
    Ok(())
}
