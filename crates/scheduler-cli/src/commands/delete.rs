use anyhow::Result;
use dialoguer::Confirm;
use scheduler_core::repository::TaskRepository;

use crate::cli::DeleteCommand;

pub async fn delete_task(repo: &impl TaskRepository, command: DeleteCommand) -> Result<()> {
    let task = repo.get_task(command.id).await?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete task '{}'?",
                task.title
            ))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    repo.delete_task(task.id).await?;
    println!("Deleted task: '{}'", task.title);
    Ok(())
}
