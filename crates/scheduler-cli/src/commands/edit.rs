use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use scheduler_core::date::format_date;
use scheduler_core::error::CoreError;
use scheduler_core::repository::TaskRepository;
use scheduler_core::validation::validate_and_normalize_task;

use crate::cli::EditCommand;
use crate::parser::parse_date_arg;

pub async fn edit_task(repo: &impl TaskRepository, command: EditCommand, today: NaiveDate) -> Result<()> {
    let mut task = repo.get_task(command.id).await?;

    if let Some(title) = command.title {
        task.title = title;
    }
    if let Some(date) = command.date {
        task.date = parse_date_arg(&date, today)?;
    }
    if let Some(comment) = command.comment {
        task.comment = comment;
    }
    if let Some(repeat) = command.repeat {
        task.repeat = repeat;
    }

    validate_and_normalize_task(&mut task, &format_date(today)).map_err(CoreError::from)?;
    let updated = repo.update_task(task).await?;

    println!(
        "Updated task {}: '{}' on {}",
        updated.id.to_string().yellow(),
        updated.title,
        updated.date.cyan()
    );

    Ok(())
}
