//! Path utilities for pizza-shop.
//!
//! All data lives under `~/.pizza-shop/`:
//! - `~/.pizza-shop/config.toml` - main configuration
//! - `~/.pizza-shop/pizza-shop.db` - order database

use std::path::{Path, PathBuf};

/// Database location that keeps everything in memory for the process lifetime.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Returns the pizza-shop home directory (`~/.pizza-shop/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pizza-shop")
}

/// Returns the default config file path (`~/.pizza-shop/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default database path (`~/.pizza-shop/pizza-shop.db`).
pub fn default_database() -> PathBuf {
    home_dir().join("pizza-shop.db")
}

/// Returns true for the in-memory database sentinel.
pub fn is_in_memory(path: &Path) -> bool {
    path.as_os_str() == IN_MEMORY_DATABASE
}

/// Ensures the directory that will hold `database` exists.
pub fn ensure_parent_dir(database: &Path) -> std::io::Result<()> {
    if is_in_memory(database) {
        return Ok(());
    }
    match database.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_pizza_shop_home() {
        let home = home_dir();
        let config = default_config();
        let db = default_database();

        assert!(home.to_string_lossy().contains(".pizza-shop"));
        assert!(config.to_string_lossy().contains(".pizza-shop"));
        assert!(db.to_string_lossy().contains(".pizza-shop"));
    }

    #[test]
    fn in_memory_sentinel_is_recognized() {
        assert!(is_in_memory(Path::new(":memory:")));
        assert!(!is_in_memory(Path::new("orders.db")));
    }

    #[test]
    fn ensure_parent_dir_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("nested").join("deeper").join("orders.db");

        ensure_parent_dir(&db).unwrap();

        assert!(db.parent().unwrap().is_dir());
    }

    #[test]
    fn ensure_parent_dir_ignores_memory_and_bare_names() {
        assert!(ensure_parent_dir(Path::new(":memory:")).is_ok());
        assert!(ensure_parent_dir(Path::new("orders.db")).is_ok());
    }
}
