//! Shared clock and calendar helpers for integration tests.

use std::sync::Mutex;

use almanac::task::{
    domain::CalendarDay,
    ports::{KeyValueStore, KeyValueStoreError, KeyValueStoreResult},
};
use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone, Utc};
use mockable::Clock;

/// Clock that only moves when a test moves it.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Creates a clock reading `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock by `by`.
    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.lock().map_or_else(|poisoned| *poisoned.into_inner(), |now| *now)
    }
}

/// Key-value store whose writes always fail.
#[derive(Debug, Default)]
pub struct ReadOnlyStore {
    value: Option<String>,
}

impl ReadOnlyStore {
    /// Creates a store that serves `value` for every key.
    pub fn serving(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> KeyValueStoreResult<Option<String>> {
        Ok(self.value.clone())
    }

    fn set(&self, _key: &str, _value: &str) -> KeyValueStoreResult<()> {
        Err(KeyValueStoreError::persistence(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "store is read-only",
        )))
    }
}

/// Builds a UTC instant.
///
/// # Errors
///
/// Returns an error when the components do not name a real instant.
pub fn instant(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Result<DateTime<Utc>, eyre::Report> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid instant {year}-{month}-{day} {hour}:{minute}"))
}

/// Returns `hour:00` UTC on `day`.
///
/// # Errors
///
/// Returns an error when `hour` is out of range.
pub fn at_hour(day: CalendarDay, hour: u32) -> Result<DateTime<Utc>, eyre::Report> {
    let time =
        NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(|| eyre::eyre!("invalid hour {hour}"))?;
    Ok(day.date().and_time(time).and_utc())
}
