use anyhow::Context;
use clap::Parser;
use owo_colors::{OwoColorize, Style};
use scheduler_core::db;
use scheduler_core::error::{CoreError, RepeatError, ValidationError};
use scheduler_core::repository::SqliteRepository;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

#[tokio::main]
async fn main() {
    // Logs go to stderr so command output stays scriptable.
    // Override with RUST_LOG=scheduler_core=debug to see engine decisions.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("scheduler=warn,scheduler_core=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let result = match config::Config::new().context("invalid configuration") {
        Ok(config) => run(cli.command, &config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

async fn run(command: cli::Commands, config: &config::Config) -> anyhow::Result<()> {
    debug!(?config, "configuration loaded");
    let today = util::today(config)?;

    match command {
        cli::Commands::Add(command) => {
            commands::add::add_task(&open_repository(config).await?, command, today).await
        }
        cli::Commands::List(command) => {
            commands::list::list_tasks(&open_repository(config).await?, command, config, today)
                .await
        }
        cli::Commands::Show(command) => {
            commands::show::show_task(&open_repository(config).await?, command, today).await
        }
        cli::Commands::Edit(command) => {
            commands::edit::edit_task(&open_repository(config).await?, command, today).await
        }
        cli::Commands::Delete(command) => {
            commands::delete::delete_task(&open_repository(config).await?, command).await
        }
        cli::Commands::Done(command) => {
            commands::done::done_task(&open_repository(config).await?, command, today).await
        }
        // Pure computation, no database is opened.
        cli::Commands::NextDate(command) => commands::next_date::print_next_date(command, today),
    }
}

async fn open_repository(config: &config::Config) -> Result<SqliteRepository, CoreError> {
    let db_pool = db::establish_connection(&config.dbfile).await?;
    Ok(SqliteRepository::new(db_pool))
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(id) => {
                eprintln!("{} Task with ID '{}' not found.", "Error:".style(error_style), id);
            }
            CoreError::Validation(e) => describe_validation_error(e, error_style),
            CoreError::Repeat(e) => {
                eprintln!("{} Invalid repeat rule: {}", "Error:".style(error_style), e);
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::InvalidTimezone(tz) => {
                eprintln!(
                    "{} Invalid timezone '{}'. Set TODO_TIMEZONE to an IANA name like 'Europe/Moscow'",
                    "Error:".style(error_style),
                    tz.yellow()
                );
            }
            _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {:#}", "Error:".style(error_style), err);
    }
}

fn describe_validation_error(err: &ValidationError, error_style: Style) {
    match err {
        ValidationError::NextDate(RepeatError::InvalidRepeat(kind)) => {
            eprintln!(
                "{} Invalid repeat rule: unsupported kind '{}'. Use 'd N' or 'y'",
                "Error:".style(error_style),
                kind.yellow()
            );
        }
        ValidationError::InvalidDateFormat(date) => {
            eprintln!(
                "{} Invalid date format '{}'. Expected YYYYMMDD",
                "Error:".style(error_style),
                date.yellow()
            );
        }
        _ => eprintln!("{} Invalid task: {}", "Error:".style(error_style), err),
    }
}
