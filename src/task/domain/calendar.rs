//! Date-only calendar values.

use super::TaskDomainError;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};
use mockable::Clock;
use std::fmt;
use std::str::FromStr;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Largest offset magnitude accepted by [`CalendarZone`], in minutes.
const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// A calendar day without time-of-day.
///
/// Displays and parses as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Wraps an existing date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a day from year, month and day-of-month.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidCalendarDay`] when the components do
    /// not name a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TaskDomainError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| TaskDomainError::InvalidCalendarDay(format!("{year}-{month}-{day}")))
    }

    /// Returns the wrapped date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl FromStr for CalendarDay {
    type Err = TaskDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(value.trim(), DAY_FORMAT)
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidCalendarDay(value.to_owned()))
    }
}

/// Time zone used for every date-only comparison.
///
/// Deadlines are stored as absolute instants; the zone decides which
/// calendar day an instant falls on and what "today" is. A fixed offset
/// never follows daylight saving time, so users in such zones should pick
/// [`CalendarZone::Local`], which resolves the system offset per instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarZone {
    /// A constant offset from UTC.
    Fixed(FixedOffset),
    /// The host's local time zone, including daylight saving changes.
    Local,
}

impl CalendarZone {
    /// Returns the UTC zone.
    #[must_use]
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Creates a zone east of UTC by the given number of minutes.
    ///
    /// Negative values lie west of UTC.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidCalendarOffset`] when the magnitude
    /// reaches a full day.
    pub fn from_offset_minutes(minutes: i32) -> Result<Self, TaskDomainError> {
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
            return Err(TaskDomainError::InvalidCalendarOffset(minutes));
        }
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::Fixed)
            .ok_or(TaskDomainError::InvalidCalendarOffset(minutes))
    }

    /// Returns the constant offset, or `None` for the local zone.
    #[must_use]
    pub const fn fixed_offset(self) -> Option<FixedOffset> {
        match self {
            Self::Fixed(offset) => Some(offset),
            Self::Local => None,
        }
    }

    /// Returns the calendar day on which `instant` falls in this zone.
    #[must_use]
    pub fn day_of(self, instant: DateTime<Utc>) -> CalendarDay {
        match self {
            Self::Fixed(offset) => CalendarDay(instant.with_timezone(&offset).date_naive()),
            Self::Local => CalendarDay(instant.with_timezone(&Local).date_naive()),
        }
    }

    /// Returns the current calendar day in this zone.
    #[must_use]
    pub fn today(self, clock: &impl Clock) -> CalendarDay {
        match self {
            Self::Fixed(_) => self.day_of(clock.utc()),
            Self::Local => CalendarDay(clock.local().date_naive()),
        }
    }
}

impl Default for CalendarZone {
    fn default() -> Self {
        Self::utc()
    }
}
