use parkspot_entities::spot::ParkingSpot;
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpotInvalidation {
    #[error("Missing spot id")]
    Id,
    #[error("Missing user id")]
    UserId,
    #[error("The spot expires before it was created")]
    ExpiresBeforeCreated,
}

impl Validate for ParkingSpot {
    type Error = SpotInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.id.is_valid() {
            return Err(Self::Error::Id);
        }
        if !self.user_id.is_valid() {
            return Err(Self::Error::UserId);
        }
        if self.expires_at <= self.created_at {
            return Err(Self::Error::ExpiresBeforeCreated);
        }
        Ok(())
    }
}
