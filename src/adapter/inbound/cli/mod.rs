//! CLI module graph and command dispatch.

pub mod check;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod order;
pub mod output;
pub mod shell;

use std::process::ExitCode;

use tracing::debug;

use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::{factory, paths};
use crate::port::outbound::store::OrderStore;
use command::{Cli, ColorChoice, Commands};

/// Run a parsed command line.
///
/// # Errors
/// Returns the first error a command hits; [`report_error`] renders it.
pub fn execute(cli: Cli) -> Result<ExitCode> {
    apply_color(&cli.color);
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Commands::Config(command) = &cli.command {
        return config::execute(command, &cli.config);
    }

    let mut config = load_config(&cli)?;
    if let Some(db) = cli.db {
        config.set_database_path(db);
    }
    config.init_logging(cli.verbose);
    debug!(config = %cli.config.display(), database = %config.database.database_url(), "configuration loaded");

    match cli.command {
        Commands::Check => check::execute(&config)?,
        command => {
            let store = factory::open_order_store(&config);
            let result = run_order_command(&store, command);
            store.close();
            result?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print an error returned by [`execute`].
pub fn report_error(err: &Error) {
    match err {
        Error::Connection(message) if !output::is_json() => {
            let report = miette::Report::new(diagnostic::ConnectionError::from(message.clone()));
            eprintln!("{report:?}");
        }
        _ => output::error(&err.to_string()),
    }
}

fn run_order_command<S: OrderStore + ?Sized>(store: &S, command: Commands) -> Result<()> {
    match command {
        Commands::Place(args) => order::execute_place(store, &args.pizzas).map(|_| ()),
        Commands::List => order::execute_list(store).map(|_| ()),
        Commands::Cancel(args) => order::execute_cancel(store, args.id).map(|_| ()),
        Commands::Shell => shell::execute(store),
        Commands::Check | Commands::Config(_) => Ok(()),
    }
}

/// The default config file is optional; one named explicitly must exist.
fn load_config(cli: &Cli) -> Result<Config> {
    if cli.config == paths::default_config() {
        Config::load_or_default(&cli.config)
    } else {
        Config::load(&cli.config)
    }
}

fn apply_color(choice: &ColorChoice) {
    match choice {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
}
