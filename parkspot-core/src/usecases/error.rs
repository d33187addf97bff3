use crate::util::validate::SpotInvalidation;
use parkspot_entities::radius::InvalidDistanceSelection;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("The current location is unknown")]
    LocationUnavailable,
    #[error(transparent)]
    InvalidDistance(#[from] InvalidDistanceSelection),
    #[error("The lifetime of a spot must not be zero")]
    InvalidLifetime,
    #[error("Spot {0} does not exist")]
    SpotNotFound(String),
    #[error("Invalid spot: {0}")]
    InvalidSpot(#[from] SpotInvalidation),
    #[error("Invalid directions URL: {0}")]
    DirectionsUrl(String),
}
