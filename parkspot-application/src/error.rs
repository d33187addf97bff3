use parkspot_core::{gateways::GatewayError, usecases::Error as BError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Location unavailable: {0}")]
    LocationUnavailable(#[source] GatewayError),
    #[error("Auth initialization failed: {0}")]
    AuthInit(#[source] GatewayError),
    #[error("Could not open directions: {0}")]
    Navigation(#[source] GatewayError),
    #[error(transparent)]
    Business(#[from] BError),
}
