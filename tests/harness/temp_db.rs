use std::path::{Path, PathBuf};

use pizza_shop::adapter::outbound::sqlite::SqliteOrderStore;
use pizza_shop::infrastructure::config::DatabaseConfig;
use tempfile::TempDir;

/// Temporary on-disk SQLite database for integration tests.
///
/// The directory and everything in it is removed on drop.
pub struct TempDb {
    dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("pizza-shop-{name}-"))
            .tempdir()
            .expect("create temp dir");
        let path = dir.path().join("orders.db");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn settings(&self) -> DatabaseConfig {
        DatabaseConfig {
            path: self.path.clone(),
            ..DatabaseConfig::default()
        }
    }

    pub fn connect(&self) -> SqliteOrderStore {
        SqliteOrderStore::connect(&self.settings()).expect("connect to temp database")
    }
}
