//! Runtime configuration for the todo application.
//!
//! Every setting can come from a command-line flag or an environment
//! variable; flags win.

use clap::Parser;

/// Database used when nothing else is configured.
pub const DEFAULT_DATABASE_URL: &str = "todos.sqlite3";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "todos", version, about = "A local to-do list")]
pub struct AppConfig {
    /// `SQLite` database path, or `:memory:` for a throwaway list.
    #[arg(long, env = "TODOS_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum number of pooled database connections.
    #[arg(
        long,
        env = "TODOS_POOL_SIZE",
        default_value_t = 4,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub pool_size: u32,

    /// Log filter directives, used when `RUST_LOG` is unset.
    #[arg(long, env = "TODOS_LOG", default_value = "warn")]
    pub log_filter: String,
}

impl AppConfig {
    /// Settings for an in-memory database, mainly for tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            database_url: ":memory:".to_owned(),
            pool_size: 1,
            log_filter: "warn".to_owned(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            pool_size: 4,
            log_filter: "warn".to_owned(),
        }
    }
}
