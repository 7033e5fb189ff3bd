//! Application configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Configuration for the host binary, loaded from environment
/// variables. The library itself takes explicit values.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the character catalog API
    pub catalog_base_url: String,
    /// Bounded wait for the single catalog fetch attempt
    pub catalog_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let timeout_secs: u64 = env::var("CATALOG_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .context("CATALOG_TIMEOUT_SECS must be a number of seconds")?;

        Ok(Self {
            catalog_base_url: env::var("CATALOG_BASE_URL")
                .unwrap_or_else(|_| "https://clocktower-api.example.com/api/v1".to_string()),
            catalog_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
