use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use parkspot_application::{error::AppError, prelude::*};
use parkspot_boundary as json;
use parkspot_core::{
    entities::*,
    gateways::{
        geolocation::GeoLocationGateway,
        navigation::UrlOpener,
        session::{SessionGateway, SubscriptionGateway},
    },
    store::{SpotStore, StoreEvent},
    usecases,
};
use parkspot_gateways as gw;
use std::{cell::Cell, path::PathBuf, rc::Rc};

use crate::{
    config::{Config, GeolocationGateway, SessionGateway as SessionGatewayCfg},
    spots_file,
};

const UNPARK_PATH: &str = "/unpark";

#[derive(Debug, Parser)]
#[command(name = "parkspot", version, about = "Find and share free parking spots")]
pub struct Args {
    /// Configuration file
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON file with the known spots (overrides the configuration)
    #[arg(long, value_name = "FILE", env = "PARKSPOT_SPOTS_FILE")]
    pub spots: Option<PathBuf>,

    /// Latitude of your current position
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of your current position
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the spots around you
    Nearby {
        /// Search radius in km (1, 2, 3 or 10)
        #[arg(long, short)]
        distance: Option<f64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Offer your current position as a free spot
    Unpark {
        #[arg(long, default_value_t = SpotSize::Medium)]
        size: SpotSize,
        #[arg(long)]
        accessible: bool,
    },
    /// Get directions to a spot
    Directions {
        id: String,
        /// Open the directions in the system browser
        #[arg(long)]
        open: bool,
    },
    /// Remove all expired spots
    Purge,
}

pub fn run(args: Args, cfg: Config) -> Result<()> {
    let spots_path = args.spots.clone().unwrap_or_else(|| cfg.spots.file.clone());
    let mut store = SpotStore::with_spots(spots_file::load(&spots_path)?);
    store.set_distance_threshold(cfg.spots.default_distance);

    let spots_changed = Rc::new(Cell::new(false));
    {
        let spots_changed = Rc::clone(&spots_changed);
        store.subscribe(move |event, _| {
            if matches!(
                event,
                StoreEvent::SpotsReplaced
                    | StoreEvent::SpotAdded(_)
                    | StoreEvent::SpotRemoved(_)
                    | StoreEvent::ExpiredSpotsPurged(_)
            ) {
                spots_changed.set(true);
            }
        });
    }

    let geo = geolocation_gateway(&args, &cfg)?;

    match args.command {
        Command::Nearby { distance, json } => {
            try_locate_user(&mut store, &*geo);
            if let Some(km) = distance {
                usecases::select_distance(&mut store, km)?;
            }
            print_nearby(&store, json)?;
        }
        Command::Unpark { size, accessible } => {
            let (sessions, subscriptions) = session_gateways(&cfg);
            let auth = init_session(&*sessions, &*subscriptions).unwrap_or_else(|err| {
                log::warn!("{err}");
                AuthState::Unauthenticated
            });
            let session = match guard(&auth, UNPARK_PATH) {
                Access::Granted(session) => session,
                Access::RedirectToLogin { from } => {
                    bail!("Please log in to access {from}");
                }
            };
            locate_user(&mut store, &*geo)?;
            let new_spot = usecases::NewSpot {
                size,
                is_accessible: accessible,
            };
            let spot = unpark(&mut store, session, new_spot, cfg.spots.lifetime)?;
            println!("Spot {} is available until {}", spot.id, spot.expires_at);
        }
        Command::Directions { id, open } => {
            try_locate_user(&mut store, &*geo);
            let opener: Box<dyn UrlOpener> = if open {
                Box::new(gw::navigation::System)
            } else {
                Box::new(gw::navigation::Print)
            };
            let link = open_directions(&mut store, &id, &cfg.directions.base_url, &*opener)?;
            if link.is_none() {
                println!("Your location is unknown, no directions available");
            }
        }
        Command::Purge => {
            let count = usecases::purge_expired_spots(&mut store, Timestamp::now());
            println!("Removed {count} expired spots");
        }
    }

    if spots_changed.get() {
        spots_file::save(&spots_path, store.spots())?;
    }
    Ok(())
}

fn geolocation_gateway(args: &Args, cfg: &Config) -> Result<Box<dyn GeoLocationGateway>> {
    if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng)?;
        return Ok(Box::new(gw::geolocation::Fixed(pos)));
    }
    let gateway: Box<dyn GeoLocationGateway> = match &cfg.geolocation.gateway {
        Some(GeolocationGateway::Fixed(pos)) => Box::new(gw::geolocation::Fixed(*pos)),
        Some(GeolocationGateway::Http { url }) => {
            Box::new(gw::geolocation::Http::new(url.clone()))
        }
        None => Box::new(gw::geolocation::Unavailable),
    };
    Ok(gateway)
}

fn session_gateways(cfg: &Config) -> (Box<dyn SessionGateway>, Box<dyn SubscriptionGateway>) {
    match &cfg.session.gateway {
        SessionGatewayCfg::Static { session } => (
            Box::new(gw::session::Static(session.clone())),
            Box::new(gw::subscription::Disabled),
        ),
        SessionGatewayCfg::Http {
            user_url,
            subscription_url,
            access_token,
        } => {
            let subscriptions: Box<dyn SubscriptionGateway> = match subscription_url {
                Some(url) => Box::new(gw::subscription::Http::new(
                    url.clone(),
                    access_token.clone(),
                )),
                None => Box::new(gw::subscription::Disabled),
            };
            (
                Box::new(gw::session::Http::new(
                    user_url.clone(),
                    access_token.clone(),
                )),
                subscriptions,
            )
        }
    }
}

/// Listing spots works without a location, just unfiltered.
fn try_locate_user(store: &mut SpotStore, geo: &dyn GeoLocationGateway) {
    if let Err(AppError::LocationUnavailable(err)) = locate_user(store, geo) {
        log::info!("Showing all spots: {err}");
    }
}

fn print_nearby(store: &SpotStore, as_json: bool) -> Result<()> {
    let nearby = store.nearby_spots(Timestamp::now());
    if as_json {
        let nearby: Vec<_> = nearby
            .iter()
            .map(|n| json::NearbySpot::new(n.spot, n.distance))
            .collect();
        let out = serde_json::to_string_pretty(&nearby)?;
        println!("{out}");
        return Ok(());
    }
    match store.user_location() {
        Some(pos) => println!(
            "Nearby Parking Spots ({}) within {} of {pos}",
            nearby.len(),
            store.selected_distance()
        ),
        None => println!("Nearby Parking Spots ({})", nearby.len()),
    }
    if nearby.is_empty() {
        println!("No parking spots available nearby");
    }
    for n in &nearby {
        let access = if n.spot.is_accessible {
            "Accessible"
        } else {
            "Standard"
        };
        match n.distance {
            Some(d) => println!("  {}  {}  {access}  {d}", n.spot.id, n.spot.size),
            None => println!("  {}  {}  {access}", n.spot.id, n.spot.size),
        }
    }
    Ok(())
}
