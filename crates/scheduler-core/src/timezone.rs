use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::CoreError;

/// Validate IANA timezone name
pub fn validate_timezone(timezone: &str) -> Result<Tz, CoreError> {
    Tz::from_str(timezone).map_err(|_| CoreError::InvalidTimezone(timezone.to_string()))
}

/// The calendar date it currently is in `timezone`. This is the only place the
/// wall clock is read; everything downstream receives the date explicitly.
pub fn today_in(timezone: &str) -> Result<NaiveDate, CoreError> {
    let tz = validate_timezone(timezone)?;
    Ok(Utc::now().with_timezone(&tz).date_naive())
}
