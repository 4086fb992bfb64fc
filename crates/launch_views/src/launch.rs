use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::CalendarZone;

/// Zone-less wall-time shapes, tried after RFC 3339 and the date-only forms.
const WALL_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launch {
    pub mission_name: String,
    pub launch_date_utc: LaunchDate,
    pub launch_site: LaunchSite,
    pub rocket: Rocket,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LaunchSite {
    pub site_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rocket {
    pub rocket_name: String,
}

/// Raw launch date text as delivered by the data source.
///
/// Never validated on construction: unparseable text simply has no instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaunchDate(String);

impl LaunchDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the date to an instant; zone-less wall times are read in `zone`.
    pub fn instant_in(&self, zone: CalendarZone) -> Option<DateTime<Utc>> {
        let raw = self.0.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Some(date) = parse_date_only(raw) {
            return Some(date.and_time(NaiveTime::MIN).and_utc());
        }
        WALL_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .and_then(|naive| zone.resolve_wall_time(naive))
    }

    pub fn timestamp_millis_in(&self, zone: CalendarZone) -> Option<i64> {
        self.instant_in(zone).map(|dt| dt.timestamp_millis())
    }

    pub fn year_in(&self, zone: CalendarZone) -> Option<i32> {
        self.instant_in(zone).and_then(|dt| zone.year_of(dt))
    }
}

impl From<&str> for LaunchDate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for LaunchDate {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<DateTime<Utc>> for LaunchDate {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

// `YYYY-MM-DD`, `YYYY-MM` and `YYYY` are all midnight UTC on the first day.
fn parse_date_only(raw: &str) -> Option<NaiveDate> {
    match raw.len() {
        10 => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
        7 => NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok(),
        4 if raw.bytes().all(|b| b.is_ascii_digit()) => {
            NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1)
        }
        _ => None,
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
