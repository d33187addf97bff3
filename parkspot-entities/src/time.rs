use std::{fmt, ops::Add, time::Duration};

use time::{error::ComponentRange, format_description::well_known::Rfc3339, OffsetDateTime};

/// A UTC timestamp with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        let now = OffsetDateTime::now_utc();
        // Drop the sub-millisecond part
        Self(now - time::Duration::nanoseconds(i64::from(now.nanosecond() % 1_000_000)))
    }

    pub fn try_from_millis(millis: i64) -> Result<Self, ComponentRange> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).map(Self)
    }

    pub fn as_millis(self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }

    /// `None` if the result is not representable.
    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        let duration = time::Duration::try_from(duration).ok()?;
        self.0.checked_add(duration).map(Self)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let formatted = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_millis() {
        let t1 = Timestamp::now();
        let t2 = Timestamp::try_from_millis(t1.as_millis()).unwrap();
        assert_eq!(t1, t2);
    }

    #[test]
    fn add_duration() {
        let created = Timestamp::try_from_millis(1_700_000_000_000).unwrap();
        let expires = created + Duration::from_secs(30 * 60);
        assert_eq!(expires.as_millis() - created.as_millis(), 1_800_000);
        assert!(expires > created);
    }

    #[test]
    fn checked_add_duration() {
        let t = Timestamp::try_from_millis(1_700_000_000_000).unwrap();
        assert_eq!(
            t.checked_add(Duration::from_secs(60)),
            Some(t + Duration::from_secs(60))
        );
        assert_eq!(t.checked_add(Duration::from_secs(u64::MAX / 2)), None);
        assert_eq!(t.checked_add(Duration::MAX), None);
    }

    #[test]
    fn display_rfc3339() {
        let t = Timestamp::try_from_millis(0).unwrap();
        assert_eq!(t.to_string(), "1970-01-01T00:00:00Z");
    }
}
