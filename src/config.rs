//! Runtime configuration for a to-do board.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::domain::{CalendarZone, TaskDomainError};

/// Slot key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "my-todos";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for this schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The storage key is empty after trimming.
    #[error("storage key must not be empty")]
    EmptyStorageKey,

    /// A configured value violates a domain constraint.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

/// Board configuration.
///
/// Every field has a default, so an empty JSON object is a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use almanac::config::{AlmanacConfig, DEFAULT_STORAGE_KEY};
///
/// let config = AlmanacConfig::from_json(r#"{"calendar_offset_minutes": 540}"#)
///     .expect("valid configuration");
/// assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
/// assert_eq!(config.calendar_offset_minutes, 540);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Key of the slot holding the task list.
    pub storage_key: String,
    /// Offset east of UTC, in minutes, used for calendar-day maths.
    pub calendar_offset_minutes: i32,
    /// Use the host's local time zone instead of the fixed offset.
    pub calendar_local_time: bool,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            calendar_offset_minutes: 0,
            calendar_local_time: false,
        }
    }
}

impl AlmanacConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is malformed, the storage
    /// key is blank, or the calendar offset is out of range.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Sets the calendar offset in minutes east of UTC.
    #[must_use]
    pub const fn with_calendar_offset_minutes(mut self, minutes: i32) -> Self {
        self.calendar_offset_minutes = minutes;
        self
    }

    /// Switches calendar-day maths to the host's local time zone.
    #[must_use]
    pub const fn with_local_calendar(mut self) -> Self {
        self.calendar_local_time = true;
        self
    }

    /// Checks every field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorageKey`] or [`ConfigError::Domain`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        self.calendar_zone()?;
        Ok(())
    }

    /// Returns the configured calendar zone.
    ///
    /// The offset is validated even when local time is selected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidCalendarOffset`] when the offset is
    /// out of range.
    pub fn calendar_zone(&self) -> Result<CalendarZone, TaskDomainError> {
        let fixed = CalendarZone::from_offset_minutes(self.calendar_offset_minutes)?;
        Ok(if self.calendar_local_time {
            CalendarZone::Local
        } else {
            fixed
        })
    }
}
