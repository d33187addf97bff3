use std::fmt;

use crate::{
    entities::*,
    radius::{self, NearbySpot},
};

pub type SubscriptionId = usize;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    SpotsReplaced,
    SpotAdded(Id),
    SpotRemoved(Id),
    UserLocationChanged,
    SelectedSpotChanged,
    SelectedDistanceChanged,
    ExpiredSpotsPurged(usize),
}

/// Snapshot of everything the views render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpotState {
    spots: Vec<ParkingSpot>,
    user_location: Option<MapPoint>,
    selected_spot: Option<ParkingSpot>,
    selected_distance: DistanceThreshold,
}

impl SpotState {
    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    pub fn spot(&self, id: &str) -> Option<&ParkingSpot> {
        self.spots.iter().find(|s| s.id.as_str() == id)
    }

    pub fn user_location(&self) -> Option<MapPoint> {
        self.user_location
    }

    pub fn selected_spot(&self) -> Option<&ParkingSpot> {
        self.selected_spot.as_ref()
    }

    pub fn selected_distance(&self) -> DistanceThreshold {
        self.selected_distance
    }

    /// Unexpired spots within the selected distance of the user.
    pub fn visible_spots(&self, now: Timestamp) -> Vec<&ParkingSpot> {
        radius::filter_by_radius(
            self.spots.iter().filter(|s| !s.is_expired(now)),
            self.user_location,
            self.selected_distance.distance(),
        )
    }

    pub fn nearby_spots(&self, now: Timestamp) -> Vec<NearbySpot<'_>> {
        radius::nearby_spots(
            self.spots.iter().filter(|s| !s.is_expired(now)),
            self.user_location,
            self.selected_distance.distance(),
        )
    }
}

type Observer = Box<dyn FnMut(&StoreEvent, &SpotState)>;

/// Observable container for the spot state.
///
/// Every mutation notifies all subscribed observers exactly once
/// per emitted event, after the state has been updated.
#[derive(Default)]
pub struct SpotStore {
    state: SpotState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription_id: SubscriptionId,
}

impl fmt::Debug for SpotStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SpotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spots(spots: Vec<ParkingSpot>) -> Self {
        Self {
            state: SpotState {
                spots,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn state(&self) -> &SpotState {
        &self.state
    }

    pub fn spots(&self) -> &[ParkingSpot] {
        self.state.spots()
    }

    pub fn user_location(&self) -> Option<MapPoint> {
        self.state.user_location()
    }

    pub fn selected_spot(&self) -> Option<&ParkingSpot> {
        self.state.selected_spot()
    }

    pub fn selected_distance(&self) -> DistanceThreshold {
        self.state.selected_distance()
    }

    pub fn visible_spots(&self, now: Timestamp) -> Vec<&ParkingSpot> {
        self.state.visible_spots(now)
    }

    pub fn nearby_spots(&self, now: Timestamp) -> Vec<NearbySpot<'_>> {
        self.state.nearby_spots(now)
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &SpotState) + 'static,
    {
        let id = self.next_subscription_id;
        self.next_subscription_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if no such subscription exists.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() < len
    }

    fn notify(&mut self, event: StoreEvent) {
        log::debug!("Spot store changed: {event:?}");
        for (_, observer) in self.observers.iter_mut() {
            observer(&event, &self.state);
        }
    }

    pub fn set_spots(&mut self, spots: Vec<ParkingSpot>) {
        self.state.spots = spots;
        self.notify(StoreEvent::SpotsReplaced);
    }

    /// Appends a spot without checking for duplicate ids.
    pub fn add_spot(&mut self, spot: ParkingSpot) {
        let id = spot.id.clone();
        self.state.spots.push(spot);
        self.notify(StoreEvent::SpotAdded(id));
    }

    pub fn remove_spot(&mut self, id: &str) {
        let len = self.state.spots.len();
        self.state.spots.retain(|s| s.id.as_str() != id);
        if self.state.spots.len() == len {
            return;
        }
        self.notify(StoreEvent::SpotRemoved(id.into()));
        if self
            .state
            .selected_spot
            .as_ref()
            .is_some_and(|s| s.id.as_str() == id)
        {
            self.state.selected_spot = None;
            self.notify(StoreEvent::SelectedSpotChanged);
        }
    }

    pub fn set_user_location(&mut self, pos: MapPoint) {
        self.state.user_location = Some(pos);
        self.notify(StoreEvent::UserLocationChanged);
    }

    pub fn set_selected_spot(&mut self, spot: Option<ParkingSpot>) {
        self.state.selected_spot = spot;
        self.notify(StoreEvent::SelectedSpotChanged);
    }

    /// Only the supported radii are accepted, anything else
    /// leaves the state untouched.
    pub fn set_selected_distance(&mut self, km: f64) -> Result<(), InvalidDistanceSelection> {
        let threshold = DistanceThreshold::try_from(km)?;
        self.set_distance_threshold(threshold);
        Ok(())
    }

    pub fn set_distance_threshold(&mut self, threshold: DistanceThreshold) {
        self.state.selected_distance = threshold;
        self.notify(StoreEvent::SelectedDistanceChanged);
    }

    /// Removes all spots that have expired at `now`.
    pub fn purge_expired(&mut self, now: Timestamp) -> usize {
        let len = self.state.spots.len();
        self.state.spots.retain(|s| !s.is_expired(now));
        let purged = len - self.state.spots.len();
        if purged == 0 {
            return 0;
        }
        let selection_expired = self
            .state
            .selected_spot
            .as_ref()
            .is_some_and(|s| s.is_expired(now));
        if selection_expired {
            self.state.selected_spot = None;
        }
        self.notify(StoreEvent::ExpiredSpotsPurged(purged));
        if selection_expired {
            self.notify(StoreEvent::SelectedSpotChanged);
        }
        purged
    }
}
