use chrono::{DateTime, FixedOffset, Local};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::consts::DISPLAY_FORMAT;
use crate::error::AppError;

/// Display zone for report timestamps. `Local` is the system zone (chrono
/// renders its `%Z` as a numeric offset); `Named` pins an IANA zone, which
/// prints a real abbreviation such as `UTC` or `CEST`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Render an instant as a report timestamp in this zone.
    pub(crate) fn display(self, instant: DateTime<FixedOffset>) -> String {
        match self {
            Timezone::Local => instant
                .with_timezone(&Local)
                .format(DISPLAY_FORMAT)
                .to_string(),
            Timezone::Named(tz) => instant.with_timezone(&tz).format(DISPLAY_FORMAT).to_string(),
        }
    }
}
