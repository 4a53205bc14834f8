// server/src/db/mod.rs

//! Postgres plumbing: pool construction, schema bootstrap and the `ProductStore` backend.

pub mod pg_store;
pub mod schema;

pub use pg_store::PgProductStore;

use crate::config::AppConfig;
use crate::errors::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::{info, instrument};

pub fn connect_options(config: &AppConfig) -> PgConnectOptions {
  PgConnectOptions::new()
    .host(&config.db_host)
    .port(config.db_port)
    .username(&config.db_user)
    .password(&config.db_password)
    .database(&config.db_name)
}

/// Opens the shared pool. Fails fast if the first connection can't be made.
#[instrument(name = "db::connect", skip(config), fields(db_host = %config.db_host, db_name = %config.db_name), err(Display))]
pub async fn connect(config: &AppConfig) -> Result<PgPool> {
  let pool = PgPoolOptions::new()
    .max_connections(config.db_max_connections)
    .connect_with(connect_options(config))
    .await?;
  info!(max_connections = config.db_max_connections, "Database pool ready.");
  Ok(pool)
}
