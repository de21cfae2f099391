use anyhow::Result;
use chrono::NaiveDate;
use scheduler_core::models::Task;
use scheduler_core::query::SearchQuery;
use scheduler_core::repository::TaskRepository;
use serde::Serialize;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::views::table::display_tasks;

#[derive(Serialize)]
struct TaskList {
    tasks: Vec<Task>,
}

pub async fn list_tasks(
    repo: &impl TaskRepository,
    command: ListCommand,
    config: &Config,
    today: NaiveDate,
) -> Result<()> {
    let limit = command.limit.unwrap_or(config.tasks_limit);

    let tasks = match command.search.as_deref().filter(|s| !s.is_empty()) {
        Some(search) => repo.search_tasks(&SearchQuery::parse(search), limit).await?,
        None => repo.list_tasks(limit).await?,
    };

    if command.json {
        println!("{}", serde_json::to_string_pretty(&TaskList { tasks })?);
    } else {
        display_tasks(&tasks, today);
    }

    Ok(())
}
