//! SQLite order store implementation.
//!
//! Provides persistent storage for orders using SQLite and Diesel ORM.
//! Placement and cancellation each run inside a single transaction, so an
//! order and its pizzas are created and destroyed together.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use tracing::{debug, error, info, warn};

use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations, DbPool};
use crate::adapter::outbound::sqlite::database::model::{NewPizzaRow, OrderLineRow};
use crate::adapter::outbound::sqlite::database::schema::{orders, pizzas};
use crate::domain::{Cancellation, DomainError, OrderId, OrderLine, Pizza, PlacedOrder};
use crate::error::{Error, Result};
use crate::infrastructure::config::database::DatabaseConfig;
use crate::port::outbound::store::OrderStore;

type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Connection state of the store.
enum Link {
    Connected(DbPool),
    /// Connecting failed; every operation reports this reason.
    Disconnected(String),
}

/// Row totals, used by diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub orders: i64,
    pub pizzas: i64,
}

/// SQLite-backed order store.
///
/// Implements the [`OrderStore`] trait. The store exclusively owns its
/// connection; dropping the store (or calling [`SqliteOrderStore::close`])
/// releases it.
pub struct SqliteOrderStore {
    link: Link,
}

impl SqliteOrderStore {
    /// Create a new store over an already-migrated connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self {
            link: Link::Connected(pool),
        }
    }

    /// Open the database described by `settings` and apply migrations.
    ///
    /// # Errors
    /// Returns [`Error::Connection`] if the database cannot be opened or migrated.
    pub fn connect(settings: &DatabaseConfig) -> Result<Self> {
        let pool = create_pool(settings)?;
        run_migrations(&pool)?;
        info!(database = %settings.database_url(), "connected to order database");
        Ok(Self::new(pool))
    }

    /// Like [`connect`](Self::connect), but never fails: on error the
    /// diagnostic is logged and a disconnected store is returned.
    #[must_use]
    pub fn open(settings: &DatabaseConfig) -> Self {
        match Self::connect(settings) {
            Ok(store) => store,
            Err(e) => {
                error!(
                    database = %settings.database_url(),
                    error = %e,
                    "database connection failed"
                );
                Self::disconnected(match e {
                    Error::Connection(reason) => reason,
                    other => other.to_string(),
                })
            }
        }
    }

    /// A store with no connection. Every operation fails with `reason`.
    #[must_use]
    pub fn disconnected(reason: impl Into<String>) -> Self {
        Self {
            link: Link::Disconnected(reason.into()),
        }
    }

    /// Whether the store holds a live connection handle.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self.link, Link::Connected(_))
    }

    /// Release the connection.
    pub fn close(self) {
        if let Link::Connected(pool) = self.link {
            drop(pool);
            info!("order database connection closed");
        }
    }

    /// Count stored orders and pizzas.
    ///
    /// # Errors
    /// Returns [`Error::Query`] if a count query fails.
    pub fn counts(&self) -> Result<StoreCounts> {
        let mut conn = self.connection()?;
        let order_count: i64 = orders::table
            .count()
            .get_result(&mut conn)
            .map_err(|e| Error::Query(e.to_string()))?;
        let pizza_count: i64 = pizzas::table
            .count()
            .get_result(&mut conn)
            .map_err(|e| Error::Query(e.to_string()))?;
        Ok(StoreCounts {
            orders: order_count,
            pizzas: pizza_count,
        })
    }

    fn connection(&self) -> Result<DbConnection> {
        match &self.link {
            Link::Connected(pool) => pool.get().map_err(|e| Error::Connection(e.to_string())),
            Link::Disconnected(reason) => Err(Error::Connection(reason.clone())),
        }
    }
}

impl OrderStore for SqliteOrderStore {
    fn place_order(&self, order: &[Pizza]) -> Result<PlacedOrder> {
        if order.is_empty() {
            return Err(DomainError::EmptyOrder.into());
        }
        let mut conn = self.connection()?;

        let order_id = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                let order_id: i32 = diesel::insert_into(orders::table)
                    .default_values()
                    .returning(orders::id)
                    .get_result(conn)?;

                for pizza in order {
                    diesel::insert_into(pizzas::table)
                        .values(&NewPizzaRow::for_order(order_id, pizza))
                        .execute(conn)?;
                }
                Ok(order_id)
            })
            .map_err(|e| {
                warn!(error = %e, "order placement rolled back");
                Error::Order(e.to_string())
            })?;

        let placed = PlacedOrder {
            id: OrderId::new(order_id),
            pizzas: order.len(),
        };
        info!(order_id = %placed.id, pizzas = placed.pizzas, "order placed");
        Ok(placed)
    }

    fn list_orders(&self) -> Result<Vec<OrderLine>> {
        let mut conn = self.connection()?;

        let rows: Vec<OrderLineRow> = pizzas::table
            .inner_join(orders::table)
            .select((orders::id, pizzas::size, pizzas::toppings))
            .order_by((orders::id.asc(), pizzas::id.asc()))
            .load(&mut conn)
            .map_err(|e| Error::Query(e.to_string()))?;

        debug!(rows = rows.len(), "orders listed");
        Ok(rows.into_iter().map(OrderLine::from).collect())
    }

    fn cancel_order(&self, id: OrderId) -> Result<Cancellation> {
        let mut conn = self.connection()?;

        let (pizzas_removed, orders_removed) = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                let pizzas_removed =
                    diesel::delete(pizzas::table.filter(pizzas::order_id.eq(id.value())))
                        .execute(conn)?;
                let orders_removed = diesel::delete(orders::table.find(id.value())).execute(conn)?;
                Ok((pizzas_removed, orders_removed))
            })
            .map_err(|e| {
                warn!(order_id = %id, error = %e, "order cancellation rolled back");
                Error::Delete(e.to_string())
            })?;

        if orders_removed > 0 {
            info!(order_id = %id, pizzas_removed, "order cancelled");
            Ok(Cancellation::Cancelled { id, pizzas_removed })
        } else {
            info!(order_id = %id, "order not found");
            Ok(Cancellation::NotFound { id })
        }
    }
}
