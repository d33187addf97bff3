use parkspot_core::gateways::{session::SessionGateway, GatewayError};
use parkspot_entities::session::Session;
use reqwest::{blocking::Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::http;

/// A session configured up front, e.g. from the environment.
#[derive(Debug, Clone, Default)]
pub struct Static(pub Option<Session>);

impl SessionGateway for Static {
    fn current_session(&self) -> Result<Option<Session>, GatewayError> {
        Ok(self.0.clone())
    }
}

/// Resolves an access token into the user it was issued for.
#[derive(Debug, Clone)]
pub struct Http {
    client: Client,
    user_url: Url,
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    email: Option<String>,
}

impl From<UserResponse> for Session {
    fn from(from: UserResponse) -> Self {
        let UserResponse { id, email } = from;
        Self {
            user_id: id.into(),
            email,
        }
    }
}

impl Http {
    pub fn new(user_url: Url, access_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            user_url,
            access_token,
        }
    }
}

impl SessionGateway for Http {
    fn current_session(&self) -> Result<Option<Session>, GatewayError> {
        let Some(token) = &self.access_token else {
            log::debug!("No access token available");
            return Ok(None);
        };
        let res = self
            .client
            .get(self.user_url.clone())
            .bearer_auth(token)
            .send()
            .map_err(http::transport_error)?;
        if res.status() == StatusCode::UNAUTHORIZED {
            log::info!("The access token has been rejected");
            return Ok(None);
        }
        let user: UserResponse = http::read_json(res)?;
        Ok(Some(user.into()))
    }
}
