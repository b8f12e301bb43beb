//! Order repository contract and executor-backed implementation.
//!
//! # Responsibility
//! - Look up catalog entities by natural identifier.
//! - Persist an order header plus its option rows as one unit.
//!
//! # Invariants
//! - Lookups issue exactly one query and read at most one row.
//! - `fetch_options(&[])` issues no query.
//! - `save_order` leaves either the header and all option rows or nothing.
//! - The saved `Order` is built from inputs plus the generated key; it is
//!   not re-read from the store.

use crate::db::schema::first_missing_table;
use crate::db::{Insert, QueryExecutor, SqliteExecutor, Statement};
use crate::model::customer::Customer;
use crate::model::jeep::{Jeep, JeepModel};
use crate::model::option::JeepOption;
use crate::model::order::{NewOrder, Order};
use crate::model::part::{Color, Engine, Tire};
use crate::repo::mapping::FromRow;
use crate::repo::transaction::with_transaction;
use crate::repo::{RepoError, RepoResult};
use log::{debug, error, info};
use rusqlite::Connection;
use std::time::Instant;

const SAVE_ORDER_SCOPE: &str = "save_order";

/// Data-access contract for the jeep ordering domain.
pub trait JeepOrderRepository {
    fn fetch_customer(&self, customer_id: &str) -> RepoResult<Option<Customer>>;
    fn fetch_model(&self, model: JeepModel, trim: &str, doors: u32) -> RepoResult<Option<Jeep>>;
    fn fetch_color(&self, color_id: &str) -> RepoResult<Option<Color>>;
    fn fetch_engine(&self, engine_id: &str) -> RepoResult<Option<Engine>>;
    fn fetch_tire(&self, tire_id: &str) -> RepoResult<Option<Tire>>;
    /// Returns every option whose natural id is listed. No ordering guarantee.
    fn fetch_options(&self, option_ids: &[String]) -> RepoResult<Vec<JeepOption>>;
    /// Inserts the order header and one association row per option atomically.
    fn save_order(&self, order: &NewOrder<'_>) -> RepoResult<Order>;
    /// Options attached to a saved order, ordered by `option_pk`.
    fn fetch_order_options(&self, order_pk: i64) -> RepoResult<Vec<JeepOption>>;
}

/// Order repository over any `QueryExecutor`.
pub struct SqlJeepOrderRepository<E: QueryExecutor> {
    executor: E,
}

/// Order repository over a borrowed SQLite connection.
pub type SqliteJeepOrderRepository<'conn> = SqlJeepOrderRepository<SqliteExecutor<'conn>>;

impl<E: QueryExecutor> SqlJeepOrderRepository<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    fn fetch_first<T: FromRow>(&self, statement: &Statement) -> RepoResult<Option<T>> {
        match self.executor.query_first(statement)? {
            Some(row) => Ok(Some(T::from_row(&row)?)),
            None => Ok(None),
        }
    }

    fn fetch_all<T: FromRow>(&self, statement: &Statement) -> RepoResult<Vec<T>> {
        self.executor
            .query_rows(statement)?
            .iter()
            .map(T::from_row)
            .collect()
    }

    fn lookup<T: FromRow>(&self, statement: &Statement, event: &str) -> RepoResult<Option<T>> {
        let found = self.fetch_first::<T>(statement)?;
        debug!(
            "event={event} module=repo status=ok found={}",
            found.is_some()
        );
        Ok(found)
    }
}

impl<'conn> SqliteJeepOrderRepository<'conn> {
    /// Constructs a repository from a connection carrying the order schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if let Some(table) = first_missing_table(conn)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
        Ok(Self::new(SqliteExecutor::new(conn)))
    }
}

impl<E: QueryExecutor> JeepOrderRepository for SqlJeepOrderRepository<E> {
    fn fetch_customer(&self, customer_id: &str) -> RepoResult<Option<Customer>> {
        let statement = Customer::select()
            .filter_eq("customer_id", customer_id)
            .build();
        self.lookup(&statement, "fetch_customer")
    }

    fn fetch_model(&self, model: JeepModel, trim: &str, doors: u32) -> RepoResult<Option<Jeep>> {
        let statement = Jeep::select()
            .filter_eq("model_id", model)
            .filter_eq("trim_level", trim)
            .filter_eq("num_doors", doors)
            .build();
        self.lookup(&statement, "fetch_model")
    }

    fn fetch_color(&self, color_id: &str) -> RepoResult<Option<Color>> {
        let statement = Color::select().filter_eq("color_id", color_id).build();
        self.lookup(&statement, "fetch_color")
    }

    fn fetch_engine(&self, engine_id: &str) -> RepoResult<Option<Engine>> {
        let statement = Engine::select().filter_eq("engine_id", engine_id).build();
        self.lookup(&statement, "fetch_engine")
    }

    fn fetch_tire(&self, tire_id: &str) -> RepoResult<Option<Tire>> {
        let statement = Tire::select().filter_eq("tire_id", tire_id).build();
        self.lookup(&statement, "fetch_tire")
    }

    fn fetch_options(&self, option_ids: &[String]) -> RepoResult<Vec<JeepOption>> {
        if option_ids.is_empty() {
            return Ok(Vec::new());
        }

        let statement = JeepOption::select()
            .filter_in("option_id", option_ids)
            .build();
        let options = self.fetch_all::<JeepOption>(&statement)?;
        debug!(
            "event=fetch_options module=repo status=ok requested={} found={}",
            option_ids.len(),
            options.len()
        );
        Ok(options)
    }

    fn save_order(&self, order: &NewOrder<'_>) -> RepoResult<Order> {
        let started_at = Instant::now();
        let saved = with_transaction(&self.executor, SAVE_ORDER_SCOPE, |executor| {
            let order_pk = executor.insert_returning_key(&order_header_insert(order))?;
            for option in order.options {
                executor.execute(&order_option_insert(order_pk, option))?;
            }
            Ok(order_pk)
        });

        match saved {
            Ok(order_pk) => {
                info!(
                    "event=order_save module=repo status=ok order_pk={order_pk} option_count={} duration_ms={}",
                    order.options.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(order.into_order(order_pk))
            }
            Err(err) => {
                error!(
                    "event=order_save module=repo status=error option_count={} duration_ms={} error={err}",
                    order.options.len(),
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }

    fn fetch_order_options(&self, order_pk: i64) -> RepoResult<Vec<JeepOption>> {
        let statement = JeepOption::select()
            .inner_join(
                "order_options",
                "order_options.option_fk = options.option_pk",
            )
            .filter_eq("order_options.order_fk", order_pk)
            .order_by("options.option_pk")
            .build();
        self.fetch_all(&statement)
    }
}

fn order_header_insert(order: &NewOrder<'_>) -> Statement {
    Insert::into("orders")
        .value("customer_fk", order.customer.customer_pk)
        .value("color_fk", order.color.color_pk)
        .value("engine_fk", order.engine.engine_pk)
        .value("tire_fk", order.tire.tire_pk)
        .value("model_fk", order.jeep.model_pk)
        .value("price", order.price)
        .build()
}

fn order_option_insert(order_pk: i64, option: &JeepOption) -> Statement {
    Insert::into("order_options")
        .value("option_fk", option.option_pk)
        .value("order_fk", order_pk)
        .build()
}
