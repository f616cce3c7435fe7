use crate::error::DistributionError;
use std::fmt;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time};

pub const SECONDS_PER_HOUR: i64 = 3600;

/// Convert an hours-since-epoch count into the UTC instant starting that hour.
/// Returns `None` when the value falls outside the representable calendar range.
pub fn align_to_hour(hours_since_epoch: i64) -> Option<PrimitiveDateTime> {
    let secs = hours_since_epoch.checked_mul(SECONDS_PER_HOUR)?;
    let utc = OffsetDateTime::from_unix_timestamp(secs).ok()?;
    Some(PrimitiveDateTime::new(utc.date(), utc.time()))
}

/// An hour-aligned UTC instant. The hour it names is `[start, start + 1h)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour {
    start: PrimitiveDateTime,
}

impl Hour {
    pub fn from_hours_since_epoch(hours: i64) -> Result<Self, DistributionError> {
        align_to_hour(hours)
            .map(|start| Self { start })
            .ok_or(DistributionError::InvalidTimestamp(hours))
    }

    /// Accepts a UTC date-time only if it sits exactly on an hour boundary.
    pub fn from_datetime(start: PrimitiveDateTime) -> Result<Self, DistributionError> {
        if start.minute() != 0 || start.second() != 0 || start.nanosecond() != 0 {
            return Err(DistributionError::UnalignedHour(start.to_string()));
        }
        Ok(Self { start })
    }

    pub fn on(date: Date, hour: u8) -> Option<Self> {
        let time = Time::from_hms(hour, 0, 0).ok()?;
        Some(Self { start: PrimitiveDateTime::new(date, time) })
    }

    pub fn start(&self) -> PrimitiveDateTime {
        self.start
    }

    /// Hour of day, 0..=23.
    pub fn hour_of_day(&self) -> u8 {
        self.start.hour()
    }

    /// Epoch seconds of the (inclusive) window start.
    pub fn start_timestamp(&self) -> i64 {
        self.start.assume_utc().unix_timestamp()
    }

    /// Epoch seconds of the (exclusive) window end.
    pub fn end_timestamp(&self) -> i64 {
        self.start_timestamp() + SECONDS_PER_HOUR
    }

    pub fn hours_since_epoch(&self) -> i64 {
        self.start_timestamp().div_euclid(SECONDS_PER_HOUR)
    }

    pub fn next(self) -> Option<Self> {
        self.start.checked_add(Duration::hours(1)).map(|start| Self { start })
    }

    /// True if `hours_since_epoch` lands in this hour bucket.
    pub fn contains_hours_since_epoch(&self, hours_since_epoch: i64) -> bool {
        align_to_hour(hours_since_epoch) == Some(self.start)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{:02}:00Z", self.start.date(), self.start.hour())
    }
}

/// All 24 hours of a UTC day, in order.
pub fn hours_of_day(date: Date) -> impl Iterator<Item = Hour> {
    (0u8..24).filter_map(move |h| Hour::on(date, h))
}
