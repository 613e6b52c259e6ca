use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Crate-wide error type.
///
/// Database failures never escape the order store as driver errors; they are
/// converted into one of the four store kinds with the driver's message
/// attached.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The database link could not be established, was lost, or the store
    /// was opened in the disconnected state.
    #[error("connection error: {0}")]
    Connection(String),

    /// Placing an order failed; nothing from the order was kept.
    #[error("order error: {0}")]
    Order(String),

    /// Listing orders failed.
    #[error("query error: {0}")]
    Query(String),

    /// Cancelling an order failed; nothing was removed.
    #[error("delete error: {0}")]
    Delete(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_carry_driver_message() {
        let err = Error::Order("UNIQUE constraint failed: pizzas.id".into());
        assert_eq!(
            err.to_string(),
            "order error: UNIQUE constraint failed: pizzas.id"
        );
        assert_eq!(
            Error::Query("no such table: orders".into()).to_string(),
            "query error: no such table: orders"
        );
        assert_eq!(
            Error::Delete("database is locked".into()).to_string(),
            "delete error: database is locked"
        );
        assert_eq!(
            Error::Connection("unable to open database file".into()).to_string(),
            "connection error: unable to open database file"
        );
    }

    #[test]
    fn domain_errors_are_transparent() {
        let err: Error = DomainError::EmptyOrder.into();
        assert_eq!(err.to_string(), "an order needs at least one pizza");
    }

    #[test]
    fn config_errors_are_transparent() {
        let err: Error = ConfigError::MissingField {
            field: "database.path",
        }
        .into();
        assert_eq!(err.to_string(), "missing required field: database.path");
    }
}
