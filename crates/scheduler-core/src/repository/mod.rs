use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTask, Task};
use crate::query::SearchQuery;
use async_trait::async_trait;
use chrono::NaiveDate;

pub mod tasks;

/// Storage contract for tasks.
///
/// Operations on an id that does not exist fail with [`CoreError::NotFound`],
/// except [`TaskRepository::find_task_by_id`] which reports absence as `None`.
#[async_trait]
pub trait TaskRepository {
    async fn add_task(&self, data: NewTask) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;
    async fn get_task(&self, id: i64) -> Result<Task, CoreError>;
    /// Replaces every field of the stored task with the same id.
    async fn update_task(&self, task: Task) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
    /// Tasks ordered by date, nearest first.
    async fn list_tasks(&self, limit: u32) -> Result<Vec<Task>, CoreError>;
    async fn search_tasks(&self, query: &SearchQuery, limit: u32) -> Result<Vec<Task>, CoreError>;
    /// Marks a task done as of `today`: one-off tasks are deleted, recurring
    /// tasks move to their next occurrence.
    async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError>;
}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
