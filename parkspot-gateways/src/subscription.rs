use parkspot_core::gateways::{session::SubscriptionGateway, GatewayError};
use parkspot_entities::{id::Id, session::SubscriptionStatus};
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::http;

/// Every user is treated as a free user.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disabled;

impl SubscriptionGateway for Disabled {
    fn fetch_subscription_status(&self, _: &Id) -> Result<SubscriptionStatus, GatewayError> {
        Ok(SubscriptionStatus::default())
    }
}

#[derive(Debug, Clone)]
pub struct Http {
    client: Client,
    url: Url,
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    active: bool,
    plan: Option<String>,
}

impl Http {
    pub fn new(url: Url, access_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url,
            access_token,
        }
    }
}

impl SubscriptionGateway for Http {
    fn fetch_subscription_status(&self, user_id: &Id) -> Result<SubscriptionStatus, GatewayError> {
        let mut req = self
            .client
            .get(self.url.clone())
            .query(&[("user_id", user_id.as_str())]);
        if let Some(token) = &self.access_token {
            req = req.bearer_auth(token);
        }
        let res = req.send().map_err(http::transport_error)?;
        let StatusResponse { active, plan } = http::read_json(res)?;
        Ok(SubscriptionStatus { active, plan })
    }
}
