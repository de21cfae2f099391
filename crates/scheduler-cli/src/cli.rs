use clap::{Parser, Subcommand};

/// Scheduler: a task list with repeating due dates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(AddCommand),
    /// List or search tasks
    List(ListCommand),
    /// Show a single task
    Show(ShowCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Delete a task
    Delete(DeleteCommand),
    /// Mark a task as done
    Done(DoneCommand),
    /// Compute the next date of a repeat rule without touching storage
    #[command(name = "nextdate")]
    NextDate(NextDateCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// Due date: YYYYMMDD, DD.MM.YYYY or an expression like "tomorrow" (default: today)
    #[clap(short, long)]
    pub date: Option<String>,
    /// Free-text comment
    #[clap(short, long)]
    pub comment: Option<String>,
    /// Repeat rule
    #[clap(short, long, help = "Repeat rule: 'd N' every N days (1-400), 'y' every year")]
    pub repeat: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Search text, or a date as DD.MM.YYYY
    #[arg(short, long)]
    pub search: Option<String>,
    /// Maximum number of tasks to show
    #[arg(short, long)]
    pub limit: Option<u32>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    /// The ID of the task
    pub id: i64,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit
    pub id: i64,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub comment: Option<String>,

    #[arg(long, help = "New repeat rule; pass an empty string to make the task one-off")]
    pub repeat: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: i64,
    /// Delete without asking for confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID of the task to mark as done
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct NextDateCommand {
    /// Start date in YYYYMMDD form
    #[arg(long)]
    pub date: String,
    /// Repeat rule
    #[arg(long, default_value = "")]
    pub repeat: String,
    /// Reference date (default: today)
    #[arg(long)]
    pub now: Option<String>,
}
