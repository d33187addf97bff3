use thiserror::Error;

pub mod geolocation;
pub mod navigation;
pub mod session;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("The service is unavailable: {0}")]
    Unavailable(String),
    #[error("Permission denied: {0}")]
    Denied(String),
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}
