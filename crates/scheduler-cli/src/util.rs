use anyhow::Result;
use chrono::NaiveDate;
use scheduler_core::timezone::today_in;

use crate::config::Config;

/// Today's date in the configured timezone.
pub fn today(config: &Config) -> Result<NaiveDate> {
    Ok(today_in(&config.timezone)?)
}
