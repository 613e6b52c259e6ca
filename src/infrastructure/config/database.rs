//! Database connection settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::infrastructure::paths;

/// Where the order database lives and how the connection behaves.
///
/// SQLite needs no host, port or credentials; the whole location is a file
/// path, or `:memory:` for a throwaway database.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    ///
    /// Defaults to `~/.pizza-shop/pizza-shop.db`.
    #[serde(default = "paths::default_database")]
    pub path: PathBuf,

    /// How long a statement waits on a locked database before failing.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// Upper bound on the initial connection attempt.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_busy_timeout_ms() -> u64 {
    5_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl DatabaseConfig {
    /// Settings for a private in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::from(paths::IN_MEMORY_DATABASE),
            ..Self::default()
        }
    }

    /// Connection URL handed to the SQLite driver.
    #[must_use]
    pub fn database_url(&self) -> String {
        self.path.display().to_string()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: paths::default_database(),
            busy_timeout_ms: default_busy_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}
