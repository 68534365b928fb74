//! Patient time zone.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::enums::{ReferenceEnum, UtcOffset};

/// Largest offset accepted when parsing, in hours.
const MAX_OFFSET_HOURS: i32 = 14;

/// Time zone parse errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeZoneError {
    #[error("Malformed UTC offset: {0:?}")]
    Malformed(String),

    #[error("UTC offset out of range: {0}")]
    OutOfRange(String),
}

/// UTC offset of the patient's local time, in minutes.
///
/// Requests carry it as an integer (`120`); responses from the API use the
/// textual `+02:00` form. Both decode into the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "TimeZoneRepr")]
pub struct TimeZone {
    offset_minutes: i32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TimeZoneRepr {
    Minutes(i32),
    Text(String),
}

impl TryFrom<TimeZoneRepr> for TimeZone {
    type Error = TimeZoneError;

    fn try_from(repr: TimeZoneRepr) -> Result<Self, Self::Error> {
        match repr {
            TimeZoneRepr::Minutes(minutes) => Ok(Self::from_minutes(minutes)),
            TimeZoneRepr::Text(text) => text.parse(),
        }
    }
}

impl TimeZone {
    pub fn from_minutes(offset_minutes: i32) -> Self {
        Self { offset_minutes }
    }

    pub fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    /// The civil zone with this offset, if it is one the API knows.
    pub fn zone(&self) -> Option<UtcOffset> {
        UtcOffset::lookup(self.offset_minutes)
    }
}

impl From<UtcOffset> for TimeZone {
    fn from(zone: UtcOffset) -> Self {
        Self::from_minutes(zone.code())
    }
}

impl FromStr for TimeZone {
    type Err = TimeZoneError;

    /// Parse `±HH:MM`, `±HHMM`, `±HH` or `Z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("z") {
            return Ok(Self::from_minutes(0));
        }

        let malformed = || TimeZoneError::Malformed(s.to_string());
        let (sign, rest) = match trimmed.as_bytes().first() {
            Some(b'+') => (1, &trimmed[1..]),
            Some(b'-') => (-1, &trimmed[1..]),
            _ => (1, trimmed),
        };

        if !rest.is_ascii() {
            return Err(malformed());
        }

        let (hours, minutes) = match rest.split_once(':') {
            Some((hours, minutes)) => (hours, minutes),
            None if rest.len() == 4 => rest.split_at(2),
            None => (rest, "0"),
        };
        if hours.is_empty() || !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let hours: i32 = hours.parse().map_err(|_| malformed())?;
        let minutes: i32 = minutes.parse().map_err(|_| malformed())?;
        if hours > MAX_OFFSET_HOURS || minutes >= 60 {
            return Err(TimeZoneError::OutOfRange(s.to_string()));
        }

        Ok(Self::from_minutes(sign * (hours * 60 + minutes)))
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.offset_minutes < 0 { '-' } else { '+' };
        let total = self.offset_minutes.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", total / 60, total % 60)
    }
}

impl Serialize for TimeZone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.offset_minutes)
    }
}
