use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};
use url::Url;

const DEFAULT_CONFIG_FILE: &str = include_str!("parkspot.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub spots: Option<Spots>,
    pub directions: Option<Directions>,
    pub geolocation: Option<Geolocation>,
    pub session: Option<Session>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Spots {
    #[serde(deserialize_with = "deserialize_duration")]
    pub lifetime: Duration,
    pub default_distance_km: f64,
    pub file: PathBuf,
}

impl Default for Spots {
    fn default() -> Self {
        Config::default().spots.expect("Spots configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Directions {
    pub base_url: Url,
}

impl Default for Directions {
    fn default() -> Self {
        Config::default()
            .directions
            .expect("Directions configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geolocation {
    pub gateway: Option<GeolocationGateway>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeolocationGateway {
    Fixed,
    Http,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Session {
    pub gateway: Option<SessionGateway>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionGateway {
    Static,
    Http,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub fixed: Option<Fixed>,
    pub http_geolocation: Option<HttpGeolocation>,
    pub static_session: Option<StaticSession>,
    pub http_session: Option<HttpSession>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Fixed {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HttpGeolocation {
    pub url: Url,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StaticSession {
    pub user_id: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HttpSession {
    pub user_url: Url,
    pub subscription_url: Option<Url>,
}
