//! Time buckets for metrics rows.
//!
//! A time bucket is a UTC timestamp truncated to a unit and encoded as decimal
//! digits in an `i64`, so it sorts and compares like the time it represents:
//!
//! | Unit   | Layout           | Example          |
//! |--------|------------------|------------------|
//! | Second | `yyyyMMddHHmmss` | `20170601123456` |
//! | Minute | `yyyyMMddHHmm`   | `201706011234`   |
//! | Hour   | `yyyyMMddHH`     | `2017060112`     |
//! | Day    | `yyyyMMdd`       | `20170601`       |
//! | Month  | `yyyyMM`         | `201706`         |

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
}

impl TimeUnit {
    fn digits(self) -> u32 {
        match self {
            TimeUnit::Second => 14,
            TimeUnit::Minute => 12,
            TimeUnit::Hour => 10,
            TimeUnit::Day => 8,
            TimeUnit::Month => 6,
        }
    }
}

/// An encoded time bucket at a given unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeBucket {
    value: i64,
    unit: TimeUnit,
}

impl TimeBucket {
    pub fn from_datetime(dt: DateTime<Utc>, unit: TimeUnit) -> Self {
        let month = i64::from(dt.year()) * 100 + i64::from(dt.month());
        let value = match unit {
            TimeUnit::Month => month,
            TimeUnit::Day => month * 100 + i64::from(dt.day()),
            TimeUnit::Hour => (month * 100 + i64::from(dt.day())) * 100 + i64::from(dt.hour()),
            TimeUnit::Minute => {
                ((month * 100 + i64::from(dt.day())) * 100 + i64::from(dt.hour())) * 100
                    + i64::from(dt.minute())
            }
            TimeUnit::Second => {
                (((month * 100 + i64::from(dt.day())) * 100 + i64::from(dt.hour())) * 100
                    + i64::from(dt.minute()))
                    * 100
                    + i64::from(dt.second())
            }
        };
        Self { value, unit }
    }

    /// Bucket for a millisecond Unix timestamp.
    pub fn from_millis(millis: i64, unit: TimeUnit) -> Option<Self> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(|dt| Self::from_datetime(dt, unit))
    }

    pub fn minute(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt, TimeUnit::Minute)
    }

    /// Interpret a stored bucket value. Returns `None` if it does not decode to
    /// a valid instant at `unit`.
    pub fn from_value(value: i64, unit: TimeUnit) -> Option<Self> {
        let bucket = Self { value, unit };
        bucket.start().map(|_| bucket)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Re-bucket at a coarser unit (e.g. minute to hour).
    ///
    /// Returns `None` when `unit` is finer than this bucket's unit.
    pub fn truncate(&self, unit: TimeUnit) -> Option<Self> {
        let shift = self.unit.digits().checked_sub(unit.digits())?;
        Some(Self {
            value: self.value / 10_i64.pow(shift),
            unit,
        })
    }

    /// The first instant covered by this bucket.
    pub fn start(&self) -> Option<DateTime<Utc>> {
        let pad = 14 - self.unit.digits();
        let full = self.value.checked_mul(10_i64.pow(pad))?;

        let second = u32::try_from(full % 100).ok()?;
        let minute = u32::try_from(full / 100 % 100).ok()?;
        let hour = u32::try_from(full / 10_000 % 100).ok()?;
        let day = u32::try_from(full / 1_000_000 % 100).ok()?;
        let month = u32::try_from(full / 100_000_000 % 100).ok()?;
        let year = i32::try_from(full / 10_000_000_000).ok()?;

        // Coarse units carry zeroes for the fields they drop.
        let day = if matches!(self.unit, TimeUnit::Month) {
            1
        } else {
            day
        };

        let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
        Some(Utc.from_utc_datetime(&naive))
    }
}

impl From<TimeBucket> for i64 {
    fn from(bucket: TimeBucket) -> Self {
        bucket.value
    }
}
