//! Data-access layer for jeep orders.
//! Maps catalog lookups and order saves onto parameterized SQLite statements.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use config::{ConfigError, LoggingConfig, StoreConfig};
pub use db::{DbError, DbResult, QueryExecutor, SqlRow, SqliteExecutor, Statement};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LoggingError};
pub use model::customer::Customer;
pub use model::jeep::{Jeep, JeepModel};
pub use model::option::{JeepOption, OptionType};
pub use model::order::{NewOrder, Order};
pub use model::part::{Color, Engine, Tire};
pub use repo::order_repo::{JeepOrderRepository, SqlJeepOrderRepository, SqliteJeepOrderRepository};
pub use repo::{RepoError, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
