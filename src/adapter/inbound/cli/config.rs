//! Handlers for `pizza-shop config` subcommands.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use serde_json::json;

use crate::adapter::inbound::cli::command::ConfigCommand;
use crate::adapter::inbound::cli::{diagnostic, output};
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::settings::Config;

/// Documented configuration template written by `config init`.
pub const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Dispatch a `config` subcommand.
pub fn execute(command: &ConfigCommand, path: &Path) -> Result<ExitCode> {
    match command {
        ConfigCommand::Init(args) => execute_init(path, args.force).map(|()| ExitCode::SUCCESS),
        ConfigCommand::Show => execute_show(path).map(|()| ExitCode::SUCCESS),
        ConfigCommand::Validate => execute_validate(path).map(|valid| {
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }),
    }
}

/// Write the configuration template to `path`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::success(&format!("Created {}", output::highlight(path.display())));
    output::hint("edit database.path to choose where orders are stored");
    Ok(())
}

/// Print the effective configuration with defaults applied.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "config": serde_json::to_value(&config)?,
        }));
        return Ok(());
    }

    output::section("Configuration");
    output::field("File", path.display());
    if !path.exists() {
        output::note("file not found, showing defaults");
    }

    output::section("Database");
    output::field("Path", config.database.path.display());
    output::field("Busy timeout", format!("{} ms", config.database.busy_timeout_ms));
    output::field(
        "Connect",
        format!("{} ms", config.database.connect_timeout_ms),
    );

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Validate the configuration file at `path`, returning whether it is valid.
///
/// Problems in the file are reported here (parse failures as a
/// source-annotated diagnostic); only an unreadable file is an error.
pub fn execute_validate(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

    match Config::parse_toml(&content) {
        Ok(_) => {
            if output::is_json() {
                output::json_output(json!({
                    "command": "config.validate",
                    "path": path.display().to_string(),
                    "valid": true,
                }));
            } else {
                output::success(&format!("{} is valid", path.display()));
            }
            Ok(true)
        }
        Err(Error::Config(ConfigError::Parse(err))) if !output::is_json() => {
            let name = path.display().to_string();
            let report = miette::Report::new(diagnostic::ConfigError::from_toml(
                name, &content, &err,
            ));
            eprintln!("{report:?}");
            Ok(false)
        }
        Err(err) => {
            if output::is_json() {
                output::json_output(json!({
                    "command": "config.validate",
                    "path": path.display().to_string(),
                    "valid": false,
                    "error": err.to_string(),
                }));
            } else {
                output::error(&err.to_string());
            }
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_as_valid_config() {
        let config = Config::parse_toml(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn init_writes_template_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        execute_init(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);

        let err = execute_init(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));

        execute_init(&path, true).unwrap();
    }

    #[test]
    fn validate_reports_failure_through_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

        assert!(!execute_validate(&path).unwrap());
    }

    #[test]
    fn validate_accepts_good_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, CONFIG_TEMPLATE).unwrap();

        assert!(execute_validate(&path).unwrap());
    }

    #[test]
    fn validate_missing_file_is_error() {
        assert!(execute_validate(Path::new("/definitely/not/here.toml")).is_err());
    }
}
