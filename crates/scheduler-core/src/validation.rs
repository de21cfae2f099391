use crate::date::parse_date;
use crate::error::{RepeatError, ValidationError};
use crate::models::Schedulable;
use crate::recurrence::next_date;

/// Checks a task before it is stored and corrects its date in place.
///
/// `today` is the current date in `YYYYMMDD` form. A missing date becomes
/// `today`. A date in the past is moved to `today` for one-off tasks and to
/// the next occurrence for recurring ones; it is never rejected outright.
pub fn validate_and_normalize_task<T: Schedulable>(
    task: &mut T,
    today: &str,
) -> Result<(), ValidationError> {
    if task.title().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    if task.date().is_empty() {
        task.set_date(today.to_string());
    }

    let date = task.date().to_string();
    if parse_date(&date).is_none() {
        return Err(ValidationError::InvalidDateFormat(date));
    }

    // Zero-padded YYYYMMDD strings sort chronologically.
    if date.as_str() < today {
        let next = if task.repeat().trim().is_empty() {
            today.to_string()
        } else {
            let now = parse_date(today)
                .ok_or_else(|| RepeatError::DateParse(today.to_string()))?;
            next_date(now, &date, task.repeat())?
        };
        task.set_date(next);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTask;
    use rstest::rstest;

    fn new_task(date: &str, title: &str, repeat: &str) -> NewTask {
        NewTask {
            date: date.to_string(),
            title: title.to_string(),
            comment: String::new(),
            repeat: repeat.to_string(),
        }
    }

    #[rstest]
    #[case("", "")]
    #[case("20240301", "d 1")]
    #[case("not a date", "x")]
    fn test_empty_title_always_fails(#[case] date: &str, #[case] repeat: &str) {
        let mut task = new_task(date, "", repeat);
        assert_eq!(
            validate_and_normalize_task(&mut task, "20240301"),
            Err(ValidationError::EmptyTitle)
        );
    }

    #[test]
    fn test_empty_date_adopts_today_verbatim() {
        let mut task = new_task("", "Buy milk", "");
        validate_and_normalize_task(&mut task, "20240615").unwrap();
        assert_eq!(task.date, "20240615");

        let mut task = new_task("", "Stretch", "d 2");
        validate_and_normalize_task(&mut task, "20240615").unwrap();
        assert_eq!(task.date, "20240615");
    }

    #[rstest]
    #[case("2024-06-15")]
    #[case("20241345")]
    #[case("tomorrow")]
    fn test_invalid_date_format(#[case] date: &str) {
        let mut task = new_task(date, "Buy milk", "");
        assert_eq!(
            validate_and_normalize_task(&mut task, "20240615"),
            Err(ValidationError::InvalidDateFormat(date.to_string()))
        );
    }

    #[test]
    fn test_past_one_off_snaps_to_today() {
        let mut task = new_task("20240101", "Buy milk", "");
        validate_and_normalize_task(&mut task, "20240615").unwrap();
        assert_eq!(task.date, "20240615");
    }

    #[rstest]
    #[case("20240610", "d 7", "20240617")]
    #[case("20240608", "d 7", "20240615")]
    #[case("20230101", "y", "20250101")]
    fn test_past_recurring_advances(
        #[case] date: &str,
        #[case] repeat: &str,
        #[case] expected: &str,
    ) {
        let mut task = new_task(date, "Stretch", repeat);
        validate_and_normalize_task(&mut task, "20240615").unwrap();
        assert_eq!(task.date, expected);
    }

    #[test]
    fn test_future_and_current_dates_are_kept() {
        let mut task = new_task("20240615", "Stretch", "d 7");
        validate_and_normalize_task(&mut task, "20240615").unwrap();
        assert_eq!(task.date, "20240615");

        let mut task = new_task("20250101", "Party", "");
        validate_and_normalize_task(&mut task, "20240615").unwrap();
        assert_eq!(task.date, "20250101");
    }

    #[test]
    fn test_past_recurring_propagates_rule_errors() {
        let mut task = new_task("20240101", "Stretch", "d 401");
        assert_eq!(
            validate_and_normalize_task(&mut task, "20240615"),
            Err(ValidationError::NextDate(RepeatError::DayIntervalTooLarge(401)))
        );

        let mut task = new_task("20240101", "Stretch", "w 1,2");
        assert!(matches!(
            validate_and_normalize_task(&mut task, "20240615"),
            Err(ValidationError::NextDate(RepeatError::InvalidRepeat(_)))
        ));
        assert_eq!(task.date, "20240101");
    }
}
