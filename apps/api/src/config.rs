use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; the service starts with no environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let max_upload_mb = std::env::var("MAX_UPLOAD_MB")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<usize>()
            .context("MAX_UPLOAD_MB must be a positive integer")?;

        Ok(Config {
            port,
            rust_log,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
        })
    }
}
