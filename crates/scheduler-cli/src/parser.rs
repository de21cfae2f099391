use chrono::{NaiveDate, TimeZone, Utc};
use chrono_english::{parse_date_string, Dialect};
use scheduler_core::date::{format_date, parse_search_date};
use scheduler_core::error::CoreError;

/// Turns a date argument into `YYYYMMDD`.
///
/// All-digit input is passed through untouched so that validation reports
/// malformed dates with its own error. `DD.MM.YYYY` is converted, anything
/// else is read as an English expression ("tomorrow", "next friday")
/// relative to `today`.
pub fn parse_date_arg(input: &str, today: NaiveDate) -> Result<String, CoreError> {
    let input = input.trim();
    if input.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(input.to_string());
    }
    if let Some(date) = parse_search_date(input) {
        return Ok(date);
    }

    let midnight = today
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| CoreError::InvalidInput(format!("Invalid reference date {today}")))?;
    parse_date_string(input, Utc.from_utc_datetime(&midnight), Dialect::Uk)
        .map(|parsed| format_date(parsed.date_naive()))
        .map_err(|e| CoreError::InvalidInput(format!("Failed to parse date '{}': {}", input, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[rstest]
    #[case("20240315", "20240315")]
    #[case("20241345", "20241345")]
    #[case("", "")]
    #[case("15.03.2024", "20240315")]
    #[case("tomorrow", "20240302")]
    #[case("today", "20240301")]
    fn test_parse_date_arg(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_date_arg(input, today()).unwrap(), expected);
    }

    #[test]
    fn test_parse_date_arg_rejects_gibberish() {
        assert!(matches!(
            parse_date_arg("someday maybe", today()),
            Err(CoreError::InvalidInput(_))
        ));
    }
}
