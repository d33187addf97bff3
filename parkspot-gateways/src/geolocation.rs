use parkspot_core::gateways::{geolocation::GeoLocationGateway, GatewayError};
use parkspot_entities::geo::MapPoint;
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::http;

/// A position that is known in advance, e.g. from the command line.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub MapPoint);

impl GeoLocationGateway for Fixed {
    fn current_position(&self) -> Result<MapPoint, GatewayError> {
        Ok(self.0)
    }
}

/// Used if no position source is configured at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl GeoLocationGateway for Unavailable {
    fn current_position(&self) -> Result<MapPoint, GatewayError> {
        Err(GatewayError::Unavailable("No geolocation source".to_string()))
    }
}

/// Asks a JSON endpoint that answers with
/// `{ "latitude": .., "longitude": .. }`.
#[derive(Debug, Clone)]
pub struct Http {
    client: Client,
    url: Url,
}

#[derive(Debug, Deserialize)]
struct PositionResponse {
    latitude: f64,
    longitude: f64,
}

impl Http {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

impl GeoLocationGateway for Http {
    fn current_position(&self) -> Result<MapPoint, GatewayError> {
        log::debug!("Requesting position from {}", self.url);
        let res = self
            .client
            .get(self.url.clone())
            .send()
            .map_err(http::transport_error)?;
        let PositionResponse {
            latitude,
            longitude,
        } = http::read_json(res)?;
        MapPoint::try_from_lat_lng_deg(latitude, longitude)
            .map_err(|err| GatewayError::Decode(err.to_string()))
    }
}
