use anyhow::Result;
use chrono::NaiveDate;
use scheduler_core::repository::TaskRepository;

use crate::cli::ShowCommand;
use crate::views::table::display_task;

pub async fn show_task(repo: &impl TaskRepository, command: ShowCommand, today: NaiveDate) -> Result<()> {
    let task = repo.get_task(command.id).await?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        display_task(&task, today);
    }

    Ok(())
}
