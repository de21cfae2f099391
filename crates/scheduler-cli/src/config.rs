use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use scheduler_core::query::DEFAULT_TASKS_LIMIT;
use scheduler_core::timezone::validate_timezone;
use serde::Deserialize;

/// Settings read from `scheduler.toml` and `TODO_*` environment variables,
/// e.g. `TODO_DBFILE=/var/lib/scheduler.db`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Path of the SQLite database file
    #[serde(default = "default_dbfile")]
    pub dbfile: String,
    /// Default number of tasks shown by `list`
    #[serde(default = "default_tasks_limit")]
    pub tasks_limit: u32,
    /// IANA timezone that decides what "today" is
    #[serde(default = "detect_system_timezone")]
    pub timezone: String,
}

fn default_dbfile() -> String {
    "./scheduler.db".to_string()
}

fn default_tasks_limit() -> u32 {
    DEFAULT_TASKS_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dbfile: default_dbfile(),
            tasks_limit: default_tasks_limit(),
            timezone: detect_system_timezone(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file("scheduler.toml"))
                .merge(Env::prefixed("TODO_")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }
}

/// Detects the system timezone, falling back to UTC if detection fails
pub fn detect_system_timezone() -> String {
    if let Ok(tz) = std::env::var("TZ") {
        if validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    if let Ok(local_tz) = iana_time_zone::get_timezone() {
        if validate_timezone(&local_tz).is_ok() {
            return local_tz;
        }
    }

    "UTC".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_to_empty_sources() {
        let config = Config::from_figment(Figment::new()).unwrap();
        assert_eq!(config.dbfile, "./scheduler.db");
        assert_eq!(config.tasks_limit, 50);
        assert!(validate_timezone(&config.timezone).is_ok());
    }

    #[test]
    fn test_toml_values_override_defaults() {
        let config = Config::from_figment(Figment::from(Toml::string(
            r#"
            dbfile = "/tmp/tasks.db"
            tasks_limit = 10
            timezone = "Europe/Moscow"
            "#,
        )))
        .unwrap();

        assert_eq!(
            config,
            Config {
                dbfile: "/tmp/tasks.db".to_string(),
                tasks_limit: 10,
                timezone: "Europe/Moscow".to_string(),
            }
        );
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let result = Config::from_figment(Figment::from(Toml::string("tasks_limit = \"many\"")));
        assert!(result.is_err());
    }
}
