//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `jeep_orders_core` linkage and store bootstrap from a shell.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `jeep_orders_cli [config.toml]`

use jeep_orders_core::db::open_with_config;
use jeep_orders_core::db::schema::first_missing_table;
use jeep_orders_core::{core_version, init_from_config, StoreConfig};
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("jeep_orders_cli error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let config = match std::env::args().nth(1) {
        Some(path) => StoreConfig::load(&path).map_err(|err| err.to_string())?,
        None => StoreConfig::in_memory(),
    };
    init_from_config(&config.logging).map_err(|err| err.to_string())?;

    let conn = open_with_config(&config).map_err(|err| err.to_string())?;
    let schema = match first_missing_table(&conn).map_err(|err| err.to_string())? {
        Some(table) => format!("missing:{table}"),
        None => "ok".to_string(),
    };
    info!("event=cli_probe module=cli status=ok schema={schema}");

    println!("jeep_orders_core version={}", core_version());
    match config.database_path.as_deref() {
        Some(path) => println!("store path={}", path.display()),
        None => println!("store path=:memory:"),
    }
    println!("store schema={schema}");
    Ok(())
}
