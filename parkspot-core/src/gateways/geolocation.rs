use super::GatewayError;
use parkspot_entities::geo::MapPoint;

/// One-shot position request.
pub trait GeoLocationGateway {
    fn current_position(&self) -> Result<MapPoint, GatewayError>;
}
