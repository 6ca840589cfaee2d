use anyhow::{Context, Result};

use crate::profile::ids::IdStrategy;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub rust_log: String,
    pub id_strategy: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: match std::env::var("PORT") {
                Ok(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                Err(_) => defaults.port,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            id_strategy: match std::env::var("ID_STRATEGY") {
                Ok(v) => v
                    .parse::<IdStrategy>()
                    .context("ID_STRATEGY must be 'timestamp' or 'sequential'")?,
                Err(_) => defaults.id_strategy,
            },
        })
    }
}
