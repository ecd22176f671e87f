// src/config.rs
use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration, read from the environment (a `.env` file is
/// loaded by `main` via dotenvy before this runs). The API key is never
/// stored anywhere else.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub request_timeout: Duration,
    /// Guards /admin/metrics. Endpoint is unusable when unset.
    pub admin_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let gemini_api_key =
            env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set")?;

        let timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(v) => v
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a number of seconds")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            gemini_api_key,
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
            admin_key: env::var("ADMIN_KEY").ok(),
        })
    }
}
