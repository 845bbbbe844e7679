//! Configuration module for the Daak backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use crate::store::DEFAULT_STORAGE_KEY;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Keep the register in memory instead of SQLite
    pub in_memory: bool,
    /// Key under which the register is stored
    pub storage_key: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Username accepted by the login gate
    pub login_username: String,
    /// Password accepted by the login gate
    pub login_password: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("DAAK_DB_PATH")
            .unwrap_or_else(|_| "./data/daak.sqlite".to_string())
            .into();

        let in_memory = env::var("DAAK_IN_MEMORY")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let storage_key =
            env::var("DAAK_STORAGE_KEY").unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string());

        let bind_addr = env::var("DAAK_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()?;

        let log_level = env::var("DAAK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let login_username =
            env::var("DAAK_LOGIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let login_password =
            env::var("DAAK_LOGIN_PASSWORD").unwrap_or_else(|_| "password123".to_string());

        Ok(Self {
            db_path,
            in_memory,
            storage_key,
            bind_addr,
            log_level,
            login_username,
            login_password,
        })
    }
}
