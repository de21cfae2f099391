use crate::error::CoreError;
use crate::models::{CompletionResult, NewTask, Task};
use crate::query::SearchQuery;
use crate::recurrence::next_date;
use crate::repository::{SqliteRepository, TaskRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

#[async_trait]
impl TaskRepository for SqliteRepository {
    async fn add_task(&self, data: NewTask) -> Result<Task, CoreError> {
        let task: Task = sqlx::query_as(
            r#"INSERT INTO scheduler (date, title, comment, repeat)
            VALUES ($1, $2, $3, $4)
            RETURNING id, date, title, comment, repeat
            "#,
        )
        .bind(&data.date)
        .bind(&data.title)
        .bind(&data.comment)
        .bind(&data.repeat)
        .fetch_one(self.pool())
        .await?;

        debug!(id = task.id, date = %task.date, "task added");
        Ok(task)
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as("SELECT id, date, title, comment, repeat FROM scheduler WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(task)
    }

    async fn get_task(&self, id: i64) -> Result<Task, CoreError> {
        self.find_task_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    async fn update_task(&self, task: Task) -> Result<Task, CoreError> {
        let updated: Task = sqlx::query_as(
            r#"UPDATE scheduler
            SET date = $1, title = $2, comment = $3, repeat = $4
            WHERE id = $5
            RETURNING id, date, title, comment, repeat
            "#,
        )
        .bind(&task.date)
        .bind(&task.title)
        .bind(&task.comment)
        .bind(&task.repeat)
        .bind(task.id)
        .fetch_optional(self.pool())
        .await?
        .ok_or_else(|| CoreError::NotFound(task.id.to_string()))?;

        debug!(id = updated.id, date = %updated.date, "task updated");
        Ok(updated)
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduler WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        debug!(id, "task deleted");
        Ok(())
    }

    async fn list_tasks(&self, limit: u32) -> Result<Vec<Task>, CoreError> {
        let tasks = sqlx::query_as(
            "SELECT id, date, title, comment, repeat FROM scheduler ORDER BY date LIMIT $1",
        )
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        Ok(tasks)
    }

    async fn search_tasks(&self, query: &SearchQuery, limit: u32) -> Result<Vec<Task>, CoreError> {
        let tasks = match query {
            SearchQuery::Date(date) => {
                sqlx::query_as(
                    "SELECT id, date, title, comment, repeat FROM scheduler WHERE date = $1 LIMIT $2",
                )
                .bind(date)
                .bind(limit)
                .fetch_all(self.pool())
                .await?
            }
            SearchQuery::Text(text) => {
                let mut pattern = String::with_capacity(text.len() + 2);
                pattern.push('%');
                pattern.push_str(text);
                pattern.push('%');

                sqlx::query_as(
                    r#"SELECT id, date, title, comment, repeat FROM scheduler
                    WHERE title LIKE $1 OR comment LIKE $2
                    ORDER BY date LIMIT $3
                    "#,
                )
                .bind(&pattern)
                .bind(&pattern)
                .bind(limit)
                .fetch_all(self.pool())
                .await?
            }
        };
        Ok(tasks)
    }

    async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError> {
        let mut tx = self.pool().begin().await?;

        let task: Task = sqlx::query_as("SELECT id, date, title, comment, repeat FROM scheduler WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        if !task.is_recurring() {
            sqlx::query("DELETE FROM scheduler WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;

            debug!(id, "one-off task completed and removed");
            return Ok(CompletionResult::Removed(task));
        }

        let next = next_date(today, &task.date, &task.repeat)?;

        let rescheduled: Task = sqlx::query_as(
            r#"UPDATE scheduler
            SET date = $1
            WHERE id = $2
            RETURNING id, date, title, comment, repeat
            "#,
        )
        .bind(&next)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        debug!(id, from = %task.date, to = %next, "recurring task rescheduled");
        Ok(CompletionResult::Rescheduled {
            previous_date: task.date,
            task: rescheduled,
        })
    }
}
