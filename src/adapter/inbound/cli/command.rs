//! Command-line interface definitions.
//!
//! Defines the CLI structure for the pizza-shop application using `clap`.
//! Each order subcommand maps to one button of the shop counter: place an
//! order, display orders, cancel an order. `shell` runs the same workflow
//! interactively.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{OrderId, Pizza};
use crate::infrastructure::paths;

/// Pizza shop order entry: place, list and cancel orders
#[derive(Parser, Debug)]
#[command(name = "pizza-shop")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Path to the SQLite order database (overrides the configuration)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the pizza-shop CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Place a new order
    Place(PlaceArgs),

    /// Display all orders
    List,

    /// Cancel an order by id
    Cancel(CancelArgs),

    /// Interactive order entry
    Shell,

    /// Check the order database connection
    Check,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the `place` subcommand.
#[derive(Parser, Debug)]
pub struct PlaceArgs {
    /// Pizzas in the order, each written as SIZE or SIZE:TOPPINGS
    /// (e.g. "Large:Pepperoni, Olives")
    #[arg(required = true, value_name = "SIZE[:TOPPINGS]")]
    pub pizzas: Vec<Pizza>,
}

/// Arguments for the `cancel` subcommand.
#[derive(Parser, Debug)]
pub struct CancelArgs {
    /// Id of the order to cancel
    pub id: OrderId,
}

/// Subcommands for `pizza-shop config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}
