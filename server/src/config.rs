// server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  pub db_host: String,
  pub db_port: u16,
  pub db_user: String,
  pub db_password: String,
  pub db_name: String,
  pub db_max_connections: u32,

  // Insert sample perfumes when the table is empty on startup
  pub seed_db: bool,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 3001,
      db_host: "localhost".to_string(),
      db_port: 5432,
      db_user: "postgres".to_string(),
      db_password: String::new(),
      db_name: "mith_catalog".to_string(),
      db_max_connections: 10,
      seed_db: false,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let defaults = Self::default();
    let get_env = |var_name: &str| env::var(var_name).ok().filter(|v| !v.trim().is_empty());

    let server_host = get_env("SERVER_HOST").unwrap_or(defaults.server_host);
    // PORT takes precedence over API_PORT.
    let server_port = match (get_env("PORT"), get_env("API_PORT")) {
      (Some(raw), _) => parse_var("PORT", &raw)?,
      (None, Some(raw)) => parse_var("API_PORT", &raw)?,
      (None, None) => defaults.server_port,
    };

    let db_host = get_env("DB_HOST").unwrap_or(defaults.db_host);
    let db_port = match get_env("DB_PORT") {
      Some(raw) => parse_var("DB_PORT", &raw)?,
      None => defaults.db_port,
    };
    let db_user = get_env("DB_USER").unwrap_or(defaults.db_user);
    // An empty password is legitimate, so read it without the blank filter.
    let db_password = env::var("DB_PASSWORD").unwrap_or(defaults.db_password);
    let db_name = get_env("DB_NAME").unwrap_or(defaults.db_name);
    let db_max_connections = match get_env("DB_MAX_CONNECTIONS") {
      Some(raw) => parse_var("DB_MAX_CONNECTIONS", &raw)?,
      None => defaults.db_max_connections,
    };
    if db_max_connections == 0 {
      return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
    }

    let seed_db = match get_env("SEED_DB") {
      Some(raw) => parse_var("SEED_DB", &raw.to_ascii_lowercase())?,
      None => defaults.seed_db,
    };

    tracing::info!("Application configuration loaded successfully.");
    tracing::debug!(
      server_host = %server_host,
      server_port,
      db_host = %db_host,
      db_port,
      db_name = %db_name,
      "Loaded config details (password redacted)"
    );

    Ok(Self {
      server_host,
      server_port,
      db_host,
      db_port,
      db_user,
      db_password,
      db_name,
      db_max_connections,
      seed_db,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_var<T>(var_name: &str, raw: &str) -> Result<T>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
{
  raw
    .trim()
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", var_name, raw, e)))
}
