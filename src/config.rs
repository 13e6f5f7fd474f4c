//! Configuration management for the Personal Data Manager.
//!
//! Configuration comes from environment variables (with a `.env` file
//! honored when present); every value has a default, so a plain invocation
//! needs no setup.

use std::env;
use std::path::PathBuf;

/// Default location of the address book database.
pub const DEFAULT_DB_PATH: &str = "data/address_book.db";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file
    pub database_path: PathBuf,

    /// Log level filter used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Recognized variables:
    /// - `ADDRESS_BOOK_DB_PATH`: database file path (default: `data/address_book.db`)
    /// - `LOG_LEVEL`: logging level (default: `error`)
    pub fn from_env() -> Self {
        // Load .env if present; ignore a missing file
        let _ = dotenvy::dotenv();

        let database_path = env::var("ADDRESS_BOOK_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Config {
            database_path,
            log_level,
        }
    }
}
