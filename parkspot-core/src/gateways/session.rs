use super::GatewayError;
use parkspot_entities::{id::Id, session::*};

pub trait SessionGateway {
    /// `Ok(None)` means nobody is logged in.
    fn current_session(&self) -> Result<Option<Session>, GatewayError>;
}

pub trait SubscriptionGateway {
    fn fetch_subscription_status(&self, user_id: &Id) -> Result<SubscriptionStatus, GatewayError>;
}
