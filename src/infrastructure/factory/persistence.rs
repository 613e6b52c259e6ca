//! Persistence factory for the order store.

use tracing::warn;

use crate::adapter::outbound::sqlite::SqliteOrderStore;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::paths;

/// Connect to the configured database, failing if it cannot be reached.
///
/// # Errors
/// Returns an error if the database directory cannot be created or the
/// database cannot be opened and migrated.
pub fn build_order_store(config: &Config) -> Result<SqliteOrderStore> {
    paths::ensure_parent_dir(&config.database.path)?;
    SqliteOrderStore::connect(&config.database)
}

/// Open the configured database, degrading to a disconnected store on failure.
///
/// The failure is logged; every operation on the returned store then reports
/// a connection error.
#[must_use]
pub fn open_order_store(config: &Config) -> SqliteOrderStore {
    if let Err(e) = paths::ensure_parent_dir(&config.database.path) {
        warn!(
            path = %config.database.path.display(),
            error = %e,
            "could not create database directory"
        );
    }
    SqliteOrderStore::open(&config.database)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Pizza;
    use crate::error::Error;
    use crate::port::outbound::store::OrderStore;

    #[test]
    fn build_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.set_database_path(dir.path().join("shop").join("orders.db"));

        let store = build_order_store(&config).unwrap();
        assert!(store.is_connected());
        assert!(dir.path().join("shop").is_dir());
    }

    #[test]
    fn open_degrades_to_disconnected_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.set_database_path(dir.path());
        config.database.connect_timeout_ms = 200;

        let store = open_order_store(&config);
        assert!(!store.is_connected());

        let pizza = Pizza::new("Large").unwrap();
        let err = store.place_order(&[pizza]).unwrap_err();
        assert!(matches!(err, Error::Connection(_)));
    }
}
