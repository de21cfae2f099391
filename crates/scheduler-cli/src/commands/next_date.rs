use anyhow::Result;
use chrono::NaiveDate;
use scheduler_core::date::parse_date;
use scheduler_core::error::CoreError;
use scheduler_core::next_date;

use crate::cli::NextDateCommand;
use crate::parser::parse_date_arg;

/// Prints only the resulting date so the output can be used in scripts.
pub fn print_next_date(command: NextDateCommand, today: NaiveDate) -> Result<()> {
    let now = match command.now {
        Some(now) => {
            let now = parse_date_arg(&now, today)?;
            parse_date(&now)
                .ok_or_else(|| CoreError::InvalidInput(format!("Invalid reference date '{now}'")))?
        }
        None => today,
    };

    let next = next_date(now, &command.date, &command.repeat).map_err(CoreError::from)?;
    println!("{next}");
    Ok(())
}
