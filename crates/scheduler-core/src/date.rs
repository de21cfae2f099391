//! The fixed textual date formats shared by the engine, storage and CLI.
//!
//! Every date that crosses the core boundary is an 8-character, zero-padded
//! `YYYYMMDD` string. Because of the padding, lexicographic order of these
//! strings equals chronological order, which storage relies on for `ORDER BY`.

use chrono::NaiveDate;

/// `chrono` format string for the canonical `YYYYMMDD` representation.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Last year that still fits the eight-character format.
pub const MAX_YEAR: i32 = 9999;

/// `chrono` format string for `DD.MM.YYYY` search input.
pub const SEARCH_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a canonical `YYYYMMDD` date.
///
/// Only exactly eight ASCII digits are accepted; `chrono` on its own would
/// also take shorter fields such as `2024011`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Interprets `DD.MM.YYYY` and returns it in canonical `YYYYMMDD` form.
pub fn parse_search_date(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[2] == b'.'
        && bytes[5] == b'.'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(value, SEARCH_DATE_FORMAT)
        .ok()
        .map(format_date)
}
