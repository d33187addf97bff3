pub mod prelude {

    use std::cell::RefCell;

    pub use parkspot_core::{
        entities::*,
        gateways::{
            geolocation::GeoLocationGateway,
            navigation::UrlOpener,
            session::{SessionGateway, SubscriptionGateway},
            GatewayError,
        },
        store::SpotStore,
    };
    pub use parkspot_entities::builders::*;
    use url::Url;

    pub fn t0() -> Timestamp {
        Timestamp::try_from_millis(1_700_000_000_000).unwrap()
    }

    pub fn westminster() -> MapPoint {
        MapPoint::from_lat_lng_deg(51.5007, -0.1246)
    }

    pub fn session(user_id: &str) -> Session {
        Session {
            user_id: user_id.into(),
            email: None,
        }
    }

    pub fn london_store() -> SpotStore {
        SpotStore::with_spots(vec![
            ParkingSpot::build()
                .id("trafalgar")
                .pos(MapPoint::from_lat_lng_deg(51.5074, -0.1278))
                .created_at(t0())
                .finish(),
            ParkingSpot::build()
                .id("camden")
                .pos(MapPoint::from_lat_lng_deg(51.5390, -0.1426))
                .created_at(t0())
                .finish(),
        ])
    }

    pub struct DummyGeo(Option<MapPoint>);

    impl DummyGeo {
        pub fn at(pos: MapPoint) -> Self {
            Self(Some(pos))
        }
        pub fn denied() -> Self {
            Self(None)
        }
    }

    impl GeoLocationGateway for DummyGeo {
        fn current_position(&self) -> Result<MapPoint, GatewayError> {
            self.0
                .ok_or_else(|| GatewayError::Denied("User denied geolocation".into()))
        }
    }

    pub enum DummySessions {
        LoggedIn(Session),
        LoggedOut,
        Failing,
    }

    impl DummySessions {
        pub fn logged_in(user_id: &str) -> Self {
            Self::LoggedIn(session(user_id))
        }
        pub fn logged_out() -> Self {
            Self::LoggedOut
        }
        pub fn failing() -> Self {
            Self::Failing
        }
    }

    impl SessionGateway for DummySessions {
        fn current_session(&self) -> Result<Option<Session>, GatewayError> {
            match self {
                Self::LoggedIn(session) => Ok(Some(session.clone())),
                Self::LoggedOut => Ok(None),
                Self::Failing => Err(GatewayError::Transport("connection refused".into())),
            }
        }
    }

    pub struct DummySubscriptions {
        status: Option<SubscriptionStatus>,
        requested_for: RefCell<Vec<String>>,
    }

    impl DummySubscriptions {
        pub fn active() -> Self {
            Self {
                status: Some(SubscriptionStatus {
                    active: true,
                    plan: Some("monthly".into()),
                }),
                requested_for: Default::default(),
            }
        }
        pub fn failing() -> Self {
            Self {
                status: None,
                requested_for: Default::default(),
            }
        }
        pub fn requested_for(&self) -> Vec<String> {
            self.requested_for.borrow().clone()
        }
    }

    impl SubscriptionGateway for DummySubscriptions {
        fn fetch_subscription_status(
            &self,
            user_id: &Id,
        ) -> Result<SubscriptionStatus, GatewayError> {
            self.requested_for.borrow_mut().push(user_id.to_string());
            self.status
                .clone()
                .ok_or_else(|| GatewayError::Unavailable("subscriptions".into()))
        }
    }

    #[derive(Default)]
    pub struct RecordingOpener(RefCell<Vec<Url>>);

    impl RecordingOpener {
        pub fn opened(&self) -> Vec<Url> {
            self.0.borrow().clone()
        }
    }

    impl UrlOpener for RecordingOpener {
        fn open(&self, url: &Url) -> Result<(), GatewayError> {
            self.0.borrow_mut().push(url.clone());
            Ok(())
        }
    }

    pub struct FailingOpener;

    impl UrlOpener for FailingOpener {
        fn open(&self, _: &Url) -> Result<(), GatewayError> {
            Err(GatewayError::Unavailable("no browser".into()))
        }
    }
}
