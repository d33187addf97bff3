pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::spot_builder::*;

pub mod spot_builder {

    use super::*;
    use crate::{geo::*, id::*, spot::*, time::*};
    use std::time::Duration;

    #[derive(Debug)]
    pub struct SpotBuild {
        spot: ParkingSpot,
    }

    impl SpotBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.spot.id = id.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.spot.pos = pos;
            self
        }
        pub fn size(mut self, size: SpotSize) -> Self {
            self.spot.size = size;
            self
        }
        pub fn accessible(mut self, is_accessible: bool) -> Self {
            self.spot.is_accessible = is_accessible;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            let lifetime = self.spot.expires_at.as_millis() - self.spot.created_at.as_millis();
            self.spot.created_at = created_at;
            self.spot.expires_at = created_at + Duration::from_millis(lifetime as u64);
            self
        }
        pub fn expires_at(mut self, expires_at: Timestamp) -> Self {
            self.spot.expires_at = expires_at;
            self
        }
        pub fn user_id(mut self, user_id: &str) -> Self {
            self.spot.user_id = user_id.into();
            self
        }
        pub fn finish(self) -> ParkingSpot {
            self.spot
        }
    }

    impl Builder for ParkingSpot {
        type Build = SpotBuild;
        fn build() -> SpotBuild {
            let created_at = Timestamp::now();
            SpotBuild {
                spot: ParkingSpot {
                    id: Id::new(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    size: SpotSize::default(),
                    is_accessible: false,
                    created_at,
                    expires_at: created_at + Duration::from_secs(30 * 60),
                    user_id: "user-1".into(),
                },
            }
        }
    }

    #[test]
    fn created_at_keeps_lifetime() {
        let t = Timestamp::try_from_millis(0).unwrap();
        let spot = ParkingSpot::build().created_at(t).finish();
        assert_eq!(spot.created_at, t);
        assert_eq!(spot.expires_at.as_millis(), 1_800_000);
    }
}
