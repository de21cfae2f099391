use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::{OwoColorize, Style};
use scheduler_core::date::format_date;
use scheduler_core::error::CoreError;
use scheduler_core::models::NewTask;
use scheduler_core::repository::TaskRepository;
use scheduler_core::validation::validate_and_normalize_task;

use crate::cli::AddCommand;
use crate::parser::parse_date_arg;

pub async fn add_task(repo: &impl TaskRepository, command: AddCommand, today: NaiveDate) -> Result<()> {
    let date = command
        .date
        .as_deref()
        .map(|d| parse_date_arg(d, today))
        .transpose()?
        .unwrap_or_default();

    let mut new_task = NewTask {
        date,
        title: command.title,
        comment: command.comment.unwrap_or_default(),
        repeat: command.repeat.unwrap_or_default(),
    };
    validate_and_normalize_task(&mut new_task, &format_date(today)).map_err(CoreError::from)?;

    let added_task = repo.add_task(new_task).await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    let subtle_style = Style::new().bright_black();

    println!(
        "{} Created task: {}",
        "✓".style(success_style),
        added_task.title.bright_white().bold()
    );
    println!(
        "  {} Task ID: {}",
        "→".style(info_style),
        added_task.id.to_string().yellow()
    );
    println!(
        "  {} Date: {}",
        "→".style(info_style),
        added_task.date.cyan()
    );
    if added_task.is_recurring() {
        println!(
            "  {} Repeats: {}",
            "→".style(info_style),
            added_task.repeat.cyan()
        );
    }
    println!(
        "   {} Mark done: scheduler done {}",
        "•".style(subtle_style),
        added_task.id.to_string().yellow()
    );

    Ok(())
}
