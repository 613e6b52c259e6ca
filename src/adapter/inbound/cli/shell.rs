//! Interactive order entry.
//!
//! A prompt loop over the same three actions as the subcommands. Store
//! failures are shown and the loop carries on; only terminal errors end it.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::adapter::inbound::cli::{order, output};
use crate::domain::{OrderId, Pizza};
use crate::error::{ConfigError, Result};
use crate::port::outbound::store::OrderStore;

const MENU: &[&str] = &["Add order", "Display orders", "Cancel order", "Quit"];

/// Run the interactive shell until the clerk quits.
pub fn execute<S: OrderStore + ?Sized>(store: &S) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "`pizza-shop shell` is interactive; use place, list and cancel for scripting"
                .to_string(),
        }
        .into());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    let theme = ColorfulTheme::default();

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Pizza Shop")
            .items(MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => add_order(store, &theme)?,
            1 => report(order::execute_list(store)),
            2 => cancel_order(store, &theme)?,
            _ => break,
        }
        println!();
    }

    Ok(())
}

/// Prompt for pizzas until the clerk is done, then place them as one order.
fn add_order<S: OrderStore + ?Sized>(store: &S, theme: &ColorfulTheme) -> Result<()> {
    let mut pizzas = Vec::new();

    loop {
        let size: String = Input::with_theme(theme)
            .with_prompt("Pizza size")
            .validate_with(|input: &String| Pizza::new(input.as_str()).map(|_| ()))
            .interact()?;
        let toppings: String = Input::with_theme(theme)
            .with_prompt("Toppings (comma separated)")
            .allow_empty(true)
            .interact()?;

        match Pizza::from_form(&size, &toppings) {
            Ok(pizza) => pizzas.push(pizza),
            Err(e) => output::error(&e.to_string()),
        }

        let another = Confirm::with_theme(theme)
            .with_prompt("Add another pizza to this order?")
            .default(false)
            .interact()?;
        if !another {
            break;
        }
    }

    if pizzas.is_empty() {
        output::warning("No pizzas entered, nothing placed");
        return Ok(());
    }
    report(order::execute_place(store, &pizzas));
    Ok(())
}

/// Prompt for an order id, cancel it and redisplay the remaining orders.
fn cancel_order<S: OrderStore + ?Sized>(store: &S, theme: &ColorfulTheme) -> Result<()> {
    let input: String = Input::with_theme(theme)
        .with_prompt("Order ID to cancel")
        .allow_empty(true)
        .interact()?;

    let Ok(id) = input.parse::<OrderId>() else {
        output::error("Please enter a valid order ID.");
        return Ok(());
    };

    report(order::execute_cancel(store, id));
    report(order::execute_list(store));
    Ok(())
}

/// Show a failed action without leaving the shell.
fn report<T>(result: Result<T>) {
    if let Err(e) = result {
        output::error(&e.to_string());
    }
}
