use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SortDirection;

const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid view config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("fixed offset of {0} minutes is outside +/-1439")]
    OffsetOutOfRange(i32),
}

/// Zone used to truncate instants to calendar years and to read zone-less wall times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarZone {
    /// Host local time zone.
    #[default]
    Local,
    Utc,
    Fixed { offset_minutes: i32 },
}

impl CalendarZone {
    /// Calendar year of `instant` in this zone.
    ///
    /// Returns `None` only for a fixed offset that chrono cannot represent.
    pub fn year_of(&self, instant: DateTime<Utc>) -> Option<i32> {
        match self {
            CalendarZone::Local => Some(instant.with_timezone(&Local).year()),
            CalendarZone::Utc => Some(instant.year()),
            CalendarZone::Fixed { offset_minutes } => {
                let offset = fixed_offset(*offset_minutes)?;
                Some(instant.with_timezone(&offset).year())
            }
        }
    }

    /// Interprets a wall-clock time as local to this zone.
    ///
    /// Ambiguous times (DST fold) resolve to the earlier instant; times that
    /// do not exist in the zone (DST gap) have no instant.
    pub fn resolve_wall_time(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            CalendarZone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            CalendarZone::Utc => Some(naive.and_utc()),
            CalendarZone::Fixed { offset_minutes } => fixed_offset(*offset_minutes)?
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            CalendarZone::Fixed { offset_minutes } if fixed_offset(*offset_minutes).is_none() => {
                Err(ConfigError::OffsetOutOfRange(*offset_minutes))
            }
            _ => Ok(()),
        }
    }
}

fn fixed_offset(offset_minutes: i32) -> Option<FixedOffset> {
    if offset_minutes.unsigned_abs() > MAX_OFFSET_MINUTES.unsigned_abs() {
        return None;
    }
    FixedOffset::east_opt(offset_minutes * 60)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub zone: CalendarZone,
    pub initial_sort: SortDirection,
}

impl ViewConfig {
    /// Parses a JSON config document. Missing fields take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: ViewConfig = serde_json::from_str(raw)?;
        config.zone.validate()?;
        Ok(config)
    }
}
