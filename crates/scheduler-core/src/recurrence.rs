//! Recurrence rules and the date advancer.
//!
//! A rule is a whitespace separated string. The first field selects the kind,
//! the second and third fields are comma separated integer lists:
//!
//! | rule        | meaning                                   |
//! |-------------|-------------------------------------------|
//! | `d N`       | every `N` days, `1 <= N <= 400`           |
//! | `y`         | every year on the same month and day      |
//! | `w ...`     | weekly form, recognised but not supported |
//! | `m ... ...` | monthly form, recognised but not supported|
//!
//! [`next_date`] is pure: the reference date is always passed in.

use chrono::{Datelike, Days, NaiveDate};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::date::{format_date, parse_date, MAX_YEAR};
use crate::error::RepeatError;

/// Largest accepted interval for the daily rule.
pub const MAX_DAY_INTERVAL: i64 = 400;

/// Raw fields of a rule string before the kind is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatTokens<'a> {
    pub kind: &'a str,
    pub first: Vec<i64>,
    /// Reserved for the weekly and monthly forms.
    pub second: Vec<i64>,
}

/// Splits a rule into its kind and integer lists.
///
/// Returns `None` when the rule has no fields at all. A list item that is not
/// an integer is logged and replaced by `0`, the rest of the list is kept.
pub fn tokenize(repeat: &str) -> Option<RepeatTokens<'_>> {
    let mut fields = repeat.split_whitespace();
    let kind = fields.next()?;
    let first = fields.next().map(parse_numbers).unwrap_or_default();
    let second = fields.next().map(parse_numbers).unwrap_or_default();

    Some(RepeatTokens {
        kind,
        first,
        second,
    })
}

fn parse_numbers(field: &str) -> Vec<i64> {
    field
        .split(',')
        .map(|token| {
            token.parse::<i64>().unwrap_or_else(|err| {
                warn!(token, error = %err, "repeat parameter is not an integer, using 0");
                0
            })
        })
        .collect()
}

/// A parsed recurrence rule. Only the kinds the advancer can evaluate exist
/// here; every other kind is rejected by [`RepeatRule::from_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeatRule {
    /// `d N[,...]`: only the first value is used as the interval.
    Daily(Vec<i64>),
    /// `y`: parameters are accepted and ignored.
    Yearly(Vec<i64>),
}

impl FromStr for RepeatRule {
    type Err = RepeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(s).ok_or(RepeatError::EmptyRepeat)?;
        match tokens.kind {
            "d" => Ok(RepeatRule::Daily(tokens.first)),
            "y" => Ok(RepeatRule::Yearly(tokens.first)),
            other => Err(RepeatError::InvalidRepeat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Days(u64),
    Years(i32),
}

impl Step {
    fn apply(self, date: NaiveDate) -> Result<NaiveDate, RepeatError> {
        let next = match self {
            Step::Days(days) => date.checked_add_days(Days::new(days)),
            Step::Years(years) => add_years(date, years),
        };
        next.filter(|date| date.year() <= MAX_YEAR)
            .ok_or(RepeatError::DateOutOfRange)
    }
}

/// Adds whole years keeping month and day. A day that does not exist in the
/// target month (February 29) rolls over into the following month.
fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = date.year().checked_add(years)?;
    NaiveDate::from_ymd_opt(year, date.month(), 1)?
        .checked_add_days(Days::new(u64::from(date.day0())))
}

impl RepeatRule {
    fn step(&self) -> Result<Step, RepeatError> {
        match self {
            RepeatRule::Daily(params) => {
                let interval = *params.first().ok_or(RepeatError::EmptyDayParameter)?;
                if interval > MAX_DAY_INTERVAL {
                    return Err(RepeatError::DayIntervalTooLarge(interval));
                }
                // A zero or negative interval would never reach `now`.
                let days = u64::try_from(interval)
                    .ok()
                    .filter(|days| *days > 0)
                    .ok_or(RepeatError::DayIntervalNotPositive(interval))?;
                Ok(Step::Days(days))
            }
            RepeatRule::Yearly(_) => Ok(Step::Years(1)),
        }
    }

    /// Returns the first occurrence after `start` that is not before `now`.
    ///
    /// The rule is always applied at least once, so a `start` that is already
    /// on or after `now` still moves forward by one step.
    pub fn advance(&self, start: NaiveDate, now: NaiveDate) -> Result<NaiveDate, RepeatError> {
        let step = self.step()?;
        let mut next = step.apply(start)?;
        while next < now {
            next = step.apply(next)?;
        }
        Ok(next)
    }
}

/// Computes the next occurrence of a task dated `date` under `repeat`,
/// relative to `now`. Input and output dates use the `YYYYMMDD` format.
pub fn next_date(now: NaiveDate, date: &str, repeat: &str) -> Result<String, RepeatError> {
    if repeat.trim().is_empty() {
        return Err(RepeatError::EmptyRepeat);
    }

    let start = parse_date(date).ok_or_else(|| RepeatError::DateParse(date.to_string()))?;
    let rule: RepeatRule = repeat.parse()?;
    let next = format_date(rule.advance(start, now)?);

    debug!(%now, date, repeat, next = %next, "computed next date");
    Ok(next)
}
