//! Shared fixtures for task unit tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

use crate::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{CalendarDay, CalendarZone},
    services::TaskStore,
};

/// Slot key used by store fixtures.
pub const KEY: &str = "my-todos";

/// Manually driven clock.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect("clock lock");
        *now += by;
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock().expect("clock lock") = instant;
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}

pub fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid instant")
}

pub fn day(year: i32, month: u32, day_of_month: u32) -> CalendarDay {
    CalendarDay::from_ymd(year, month, day_of_month).expect("valid day")
}

/// 2026-10-19 10:00 UTC.
pub fn now() -> DateTime<Utc> {
    instant(2026, 10, 19, 10, 0)
}

pub fn utc() -> CalendarZone {
    CalendarZone::utc()
}

pub type MemoryStore = TaskStore<InMemoryKeyValueStore, FixedClock>;

#[fixture]
pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::at(now()))
}

#[fixture]
pub fn storage() -> InMemoryKeyValueStore {
    InMemoryKeyValueStore::new()
}

/// Opens a store over a shared handle to `storage`.
pub fn open_store(storage: &InMemoryKeyValueStore, clock: Arc<FixedClock>) -> MemoryStore {
    TaskStore::load(Arc::new(storage.clone()), clock, KEY)
}
