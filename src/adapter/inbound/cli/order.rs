//! Handlers for the order subcommands: `place`, `list` and `cancel`.
//!
//! Handlers are generic over [`OrderStore`] so the interactive shell and the
//! one-shot subcommands render results the same way.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::{Cancellation, OrderId, OrderLine, Pizza, PlacedOrder};
use crate::error::Result;
use crate::port::outbound::store::OrderStore;

/// One row of the order table.
#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "Order ID")]
    order_id: OrderId,
    #[tabled(rename = "Pizza Size")]
    size: String,
    #[tabled(rename = "Toppings")]
    toppings: String,
}

impl From<&OrderLine> for OrderRow {
    fn from(line: &OrderLine) -> Self {
        Self {
            order_id: line.order_id,
            size: line.size.clone(),
            toppings: line.toppings.clone(),
        }
    }
}

/// Render order lines as a table, one row per pizza.
#[must_use]
pub fn render_orders(lines: &[OrderLine]) -> String {
    Table::new(lines.iter().map(OrderRow::from)).to_string()
}

/// Place one order containing `pizzas`.
pub fn execute_place<S: OrderStore + ?Sized>(store: &S, pizzas: &[Pizza]) -> Result<PlacedOrder> {
    let placed = store.place_order(pizzas)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "orders.place",
            "order_id": placed.id,
            "pizzas": pizzas
                .iter()
                .map(|pizza| json!({ "size": pizza.size(), "toppings": pizza.toppings() }))
                .collect::<Vec<_>>(),
        }));
        return Ok(placed);
    }

    if output::is_quiet() {
        println!("{}", placed.id);
        return Ok(placed);
    }

    output::success(&format!(
        "Order {} placed ({} pizza{})",
        output::highlight(format!("#{}", placed.id)),
        placed.pizzas,
        if placed.pizzas == 1 { "" } else { "s" }
    ));
    for pizza in pizzas {
        output::note(&pizza.to_string());
    }
    Ok(placed)
}

/// Display every stored order.
pub fn execute_list<S: OrderStore + ?Sized>(store: &S) -> Result<Vec<OrderLine>> {
    let lines = store.list_orders()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "orders.list",
            "orders": lines
                .iter()
                .map(|line| json!({
                    "order_id": line.order_id,
                    "size": line.size,
                    "toppings": line.topping_names(),
                }))
                .collect::<Vec<_>>(),
        }));
        return Ok(lines);
    }

    if lines.is_empty() {
        output::note("No orders yet");
        return Ok(lines);
    }

    output::lines(&render_orders(&lines));
    Ok(lines)
}

/// Cancel the order with `id`. A missing order is reported, not an error.
pub fn execute_cancel<S: OrderStore + ?Sized>(store: &S, id: OrderId) -> Result<Cancellation> {
    let outcome = store.cancel_order(id)?;

    if output::is_json() {
        let mut payload = serde_json::to_value(outcome)?;
        if let Some(object) = payload.as_object_mut() {
            object.insert("command".into(), json!("orders.cancel"));
        }
        output::json_output(payload);
        return Ok(outcome);
    }

    match outcome {
        Cancellation::Cancelled { id, pizzas_removed } => output::success(&format!(
            "Order {} has been cancelled ({} pizza{} removed)",
            output::highlight(format!("#{id}")),
            pizzas_removed,
            if pizzas_removed == 1 { "" } else { "s" }
        )),
        Cancellation::NotFound { id } => {
            output::warning(&format!("Order #{id} not found, nothing cancelled"));
        }
    }
    Ok(outcome)
}
