use parkspot_core::gateways::GatewayError;
use reqwest::{blocking::Response, StatusCode};
use serde::de::DeserializeOwned;

pub(crate) fn transport_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

pub(crate) fn status_error(res: &Response) -> GatewayError {
    let status = res.status();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GatewayError::Denied(format!("{} responded with {status}", res.url()))
        }
        _ => GatewayError::Unavailable(format!("{} responded with {status}", res.url())),
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, GatewayError> {
    if !res.status().is_success() {
        return Err(status_error(&res));
    }
    res.json().map_err(|err| GatewayError::Decode(err.to_string()))
}
