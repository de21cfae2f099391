use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error(transparent)]
    Repeat(#[from] RepeatError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failures of the recurrence engine. The messages are part of the
/// client-facing contract and match what callers already display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepeatError {
    #[error("repeat cannot be empty")]
    EmptyRepeat,

    #[error("date parse error: {0}")]
    DateParse(String),

    #[error("invalid repeat value")]
    InvalidRepeat(String),

    #[error("\"d\" parameter is empty")]
    EmptyDayParameter,

    #[error("invalid \"d\" value (400 is max)")]
    DayIntervalTooLarge(i64),

    #[error("invalid \"d\" value (must be at least 1)")]
    DayIntervalNotPositive(i64),

    #[error("date out of range")]
    DateOutOfRange,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is empty")]
    EmptyTitle,

    #[error("invalid date format")]
    InvalidDateFormat(String),

    #[error("NextDate: {0}")]
    NextDate(#[from] RepeatError),
}
