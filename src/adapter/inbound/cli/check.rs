//! Order database connection check.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory;

/// Connect to the configured database, apply migrations and report totals.
pub fn execute(config: &Config) -> Result<()> {
    let database = config.database.database_url();
    let store = factory::build_order_store(config)?;
    let counts = store.counts()?;
    store.close();

    if output::is_json() {
        output::json_output(json!({
            "command": "check",
            "database": database,
            "connected": true,
            "orders": counts.orders,
            "pizzas": counts.pizzas,
        }));
        return Ok(());
    }

    output::section("Database Check");
    output::field("Database", &database);
    output::success("Connected and schema is up to date");

    output::section("Summary");
    output::field("Orders", counts.orders);
    output::field("Pizzas", counts.pizzas);
    Ok(())
}
