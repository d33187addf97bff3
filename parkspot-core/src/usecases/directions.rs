use super::prelude::*;
use std::fmt;
use url::Url;

pub const DEFAULT_DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir";

/// Deep link into an external route planner:
/// `{base}/{origin_lat},{origin_lng}/{dest_lat},{dest_lng}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsLink(Url);

impl DirectionsLink {
    pub fn new(base: &Url, origin: MapPoint, destination: MapPoint) -> Result<Self> {
        let mut url = base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::DirectionsUrl(base.to_string()))?;
            segments
                .pop_if_empty()
                .push(&origin.to_string())
                .push(&destination.to_string());
        }
        Ok(Self(url))
    }

    pub fn url(&self) -> &Url {
        &self.0
    }

    pub fn into_url(self) -> Url {
        self.0
    }
}

impl fmt::Display for DirectionsLink {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
