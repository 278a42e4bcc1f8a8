//! Configuration module for the timetable backend.
//!
//! All configuration is loaded from environment variables (and an optional `.env` file).

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Default location of the SQLite document store.
pub const DEFAULT_DB_PATH: &str = "./data/ttGen.sqlite";
/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("TTGEN_DB_PATH")
            .unwrap_or_else(|_| DEFAULT_DB_PATH.to_string())
            .into();

        let bind_addr = env::var("TTGEN_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()?;

        let log_level = env::var("TTGEN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
        })
    }
}
