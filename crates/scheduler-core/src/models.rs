use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use sqlx::FromRow;

/// A stored task. `date` is always in `YYYYMMDD` form and `repeat` is the raw
/// rule string, empty for one-off tasks.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Assigned by storage. Serialized as a string, which is what clients of
    /// the JSON output expect.
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub repeat: String,
}

impl Task {
    pub fn is_recurring(&self) -> bool {
        !self.repeat.trim().is_empty()
    }
}

/// Data for a task that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub repeat: String,
}

impl NewTask {
    pub fn with_id(self, id: i64) -> Task {
        Task {
            id,
            date: self.date,
            title: self.title,
            comment: self.comment,
            repeat: self.repeat,
        }
    }
}

/// Fields shared by stored and unsaved tasks that validation works on.
pub trait Schedulable {
    fn title(&self) -> &str;
    fn date(&self) -> &str;
    fn set_date(&mut self, date: String);
    fn repeat(&self) -> &str;
}

impl Schedulable for Task {
    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn set_date(&mut self, date: String) {
        self.date = date;
    }

    fn repeat(&self) -> &str {
        &self.repeat
    }
}

impl Schedulable for NewTask {
    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn set_date(&mut self, date: String) {
        self.date = date;
    }

    fn repeat(&self) -> &str {
        &self.repeat
    }
}

#[derive(Debug)]
pub enum CompletionResult {
    /// A one-off task was done and has been deleted.
    Removed(Task),
    /// A recurring task was moved to its next occurrence.
    Rescheduled { previous_date: String, task: Task },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_serializes_as_string() {
        let task = Task {
            id: 42,
            date: "20240301".to_string(),
            title: "Water plants".to_string(),
            comment: String::new(),
            repeat: "d 3".to_string(),
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["repeat"], "d 3");

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_new_task_accepts_missing_fields() {
        let task: NewTask = serde_json::from_str(r#"{"title": "Call mom"}"#).unwrap();
        assert_eq!(task.title, "Call mom");
        assert!(task.date.is_empty());
        assert!(task.repeat.is_empty());
    }

    #[test]
    fn test_is_recurring() {
        let mut task = NewTask::default().with_id(1);
        assert!(!task.is_recurring());
        task.repeat = "y".to_string();
        assert!(task.is_recurring());
    }
}
