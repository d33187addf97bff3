use anyhow::{anyhow, Result};
use parkspot_core::entities::{DistanceThreshold, Id, MapPoint, Session};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};
use url::Url;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "parkspot.toml";

const MAX_SPOT_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

const ENV_NAME_USER_ID: &str = "PARKSPOT_USER_ID";
const ENV_NAME_ACCESS_TOKEN: &str = "PARKSPOT_ACCESS_TOKEN";

pub struct Config {
    pub spots: Spots,
    pub directions: Directions,
    pub geolocation: Geolocation,
    pub session: SessionProvider,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env(env::var(ENV_NAME_USER_ID).ok(), env::var(ENV_NAME_ACCESS_TOKEN).ok());
        Ok(cfg)
    }

    fn apply_env(&mut self, user_id: Option<String>, access_token: Option<String>) {
        match &mut self.session.gateway {
            SessionGateway::Static { session } => {
                if let Some(user_id) = user_id.map(Id::from).filter(Id::is_valid) {
                    let email = session.take().and_then(|s| s.email);
                    *session = Some(Session { user_id, email });
                }
            }
            SessionGateway::Http {
                access_token: token,
                ..
            } => {
                if access_token.is_some() {
                    *token = access_token;
                }
            }
        }
    }
}

pub struct Spots {
    /// How long a freshly unparked spot stays visible.
    pub lifetime: Duration,
    pub default_distance: DistanceThreshold,
    /// JSON file holding the known spots.
    pub file: PathBuf,
}

pub struct Directions {
    pub base_url: Url,
}

pub struct Geolocation {
    pub gateway: Option<GeolocationGateway>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeolocationGateway {
    Fixed(MapPoint),
    Http { url: Url },
}

pub struct SessionProvider {
    pub gateway: SessionGateway,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionGateway {
    /// For local usage without an auth provider
    Static { session: Option<Session> },
    Http {
        user_url: Url,
        subscription_url: Option<Url>,
        access_token: Option<String>,
    },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            spots,
            directions,
            geolocation,
            session,
            gateway,
        } = from;

        let raw::Spots {
            lifetime,
            default_distance_km,
            file,
        } = spots.unwrap_or_default();

        if lifetime.is_zero() {
            return Err(anyhow!("The spot lifetime must not be zero"));
        }
        if lifetime > MAX_SPOT_LIFETIME {
            return Err(anyhow!(
                "The spot lifetime must not exceed {}h",
                MAX_SPOT_LIFETIME.as_secs() / 3600
            ));
        }
        let default_distance = DistanceThreshold::try_from(default_distance_km)?;
        let spots = Spots {
            lifetime,
            default_distance,
            file,
        };

        let raw::Directions { base_url } = directions.unwrap_or_default();
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("Invalid directions base URL '{base_url}'"));
        }
        let directions = Directions { base_url };

        let geo_gateway = match geolocation.unwrap_or_default().gateway {
            Some(raw::GeolocationGateway::Fixed) => {
                let raw::Fixed {
                    latitude,
                    longitude,
                } = gateway
                    .clone()
                    .unwrap_or_default()
                    .fixed
                    .ok_or_else(|| anyhow!("Missing 'fixed' gateway configuration"))?;
                let pos = MapPoint::try_from_lat_lng_deg(latitude, longitude)?;
                log::info!("Use fixed geolocation ({pos})");
                Some(GeolocationGateway::Fixed(pos))
            }
            Some(raw::GeolocationGateway::Http) => {
                let raw::HttpGeolocation { url } = gateway
                    .clone()
                    .unwrap_or_default()
                    .http_geolocation
                    .ok_or_else(|| anyhow!("Missing 'http-geolocation' gateway configuration"))?;
                log::info!("Use HTTP geolocation ({url})");
                Some(GeolocationGateway::Http { url })
            }
            None => None,
        };
        let geolocation = Geolocation {
            gateway: geo_gateway,
        };

        let session_gateway = match session.unwrap_or_default().gateway {
            Some(raw::SessionGateway::Http) => {
                let raw::HttpSession {
                    user_url,
                    subscription_url,
                } = gateway
                    .unwrap_or_default()
                    .http_session
                    .ok_or_else(|| anyhow!("Missing 'http-session' gateway configuration"))?;
                log::info!("Use HTTP session provider ({user_url})");
                SessionGateway::Http {
                    user_url,
                    subscription_url,
                    access_token: None,
                }
            }
            Some(raw::SessionGateway::Static) | None => {
                let raw::StaticSession { user_id, email } = gateway
                    .and_then(|gw| gw.static_session)
                    .unwrap_or_default();
                let session = user_id
                    .map(Id::from)
                    .filter(Id::is_valid)
                    .map(|user_id| Session { user_id, email });
                SessionGateway::Static { session }
            }
        };
        let session = SessionProvider {
            gateway: session_gateway,
        };

        Ok(Self {
            spots,
            directions,
            geolocation,
            session,
        })
    }
}
