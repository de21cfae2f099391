use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use scheduler_core::models::CompletionResult;
use scheduler_core::repository::TaskRepository;

use crate::cli::DoneCommand;

pub async fn done_task(repo: &impl TaskRepository, command: DoneCommand, today: NaiveDate) -> Result<()> {
    match repo.complete_task(command.id, today).await? {
        CompletionResult::Removed(task) => {
            println!("Completed task: '{}'", task.title);
        }
        CompletionResult::Rescheduled { previous_date, task } => {
            println!("Completed task: '{}' ({})", task.title, previous_date);
            println!("Next occurrence: {}", task.date.cyan());
        }
    }

    Ok(())
}
