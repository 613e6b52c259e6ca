//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::pizzas;
use crate::domain::{OrderId, OrderLine, Pizza};

/// Database row for a pizza (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = pizzas)]
pub struct NewPizzaRow<'a> {
    pub order_id: i32,
    pub size: &'a str,
    pub toppings: String,
}

impl<'a> NewPizzaRow<'a> {
    /// Row for `pizza` attached to the order with key `order_id`.
    #[must_use]
    pub fn for_order(order_id: i32, pizza: &'a Pizza) -> Self {
        Self {
            order_id,
            size: pizza.size(),
            toppings: pizza.toppings_label(),
        }
    }
}

/// One joined `orders` x `pizzas` row, selected as `(orders.id, size, toppings)`.
#[derive(Queryable, Debug, Clone)]
pub struct OrderLineRow {
    pub order_id: i32,
    pub size: String,
    pub toppings: String,
}

impl From<OrderLineRow> for OrderLine {
    fn from(row: OrderLineRow) -> Self {
        OrderLine::new(OrderId::new(row.order_id), row.size, row.toppings)
    }
}
