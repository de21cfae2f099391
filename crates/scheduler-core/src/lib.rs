//! # Scheduler Core Library
//!
//! Task storage with date-based recurrence. Tasks carry a due date in the
//! fixed `YYYYMMDD` format and an optional repeat rule such as `d 7` (every
//! seven days) or `y` (every year). Marking a recurring task done moves it to
//! its next occurrence; marking a one-off task done removes it.
//!
//! ## Core Modules
//!
//! - [`recurrence`]: repeat rule parsing and the next-date computation
//! - [`validation`]: normalization of tasks before they are stored
//! - [`date`]: the `YYYYMMDD` and `DD.MM.YYYY` formats
//! - [`models`]: task records and completion results
//! - [`repository`]: data access layer with the Repository pattern
//! - [`query`]: search input interpretation
//! - [`db`]: database connection and migration management
//! - [`timezone`]: resolving "today" in a configured timezone
//! - [`error`]: error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use scheduler_core::{
//!     db, models::NewTask, repository::{SqliteRepository, TaskRepository},
//!     timezone::today_in, validation::validate_and_normalize_task, date::format_date,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), scheduler_core::error::CoreError> {
//!     let pool = db::establish_connection("scheduler.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!     let today = today_in("UTC")?;
//!
//!     let mut task = NewTask {
//!         title: "Water the plants".to_string(),
//!         repeat: "d 3".to_string(),
//!         ..Default::default()
//!     };
//!     validate_and_normalize_task(&mut task, &format_date(today))?;
//!
//!     let task = repo.add_task(task).await?;
//!     repo.complete_task(task.id, today).await?;
//!     Ok(())
//! }
//! ```

pub mod date;
pub mod db;
pub mod error;
pub mod models;
pub mod query;
pub mod recurrence;
pub mod repository;
pub mod timezone;
pub mod validation;

pub use recurrence::next_date;
pub use validation::validate_and_normalize_task;
