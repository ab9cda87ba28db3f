use anyhow::{Context, Result, bail};
use std::env;

/// Official track-query endpoint.
pub const DEFAULT_API_URL: &str = "http://api.kdniao.cc/Ebusiness/EbusinessOrderHandle.aspx";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Vendor credentials and endpoint configuration.
///
/// Credentials are issued per merchant account and must come from the
/// environment, never from compiled-in constants.
#[derive(Debug, Clone)]
pub struct Config {
    pub business_id: String,
    pub app_key: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Config {
    /// Build a configuration against the official endpoint with the default
    /// timeout.
    pub fn new(business_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            business_id: business_id.into(),
            app_key: app_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Environment Variables
    /// - `KDNIAO_BUSINESS_ID`: Required - merchant id (EBusinessID)
    /// - `KDNIAO_APP_KEY`: Required - signing key issued with the account
    /// - `KDNIAO_API_URL`: Optional - endpoint override (default: official endpoint)
    /// - `KDNIAO_TIMEOUT_SECS`: Optional - HTTP timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self> {
        // Parse merchant id (required)
        let business_id = env::var("KDNIAO_BUSINESS_ID")
            .context("KDNIAO_BUSINESS_ID not set")?;

        if business_id.trim().is_empty() {
            bail!("KDNIAO_BUSINESS_ID cannot be empty");
        }

        // Parse signing key (required)
        let app_key = env::var("KDNIAO_APP_KEY")
            .context("KDNIAO_APP_KEY not set")?;

        if app_key.trim().is_empty() {
            bail!("KDNIAO_APP_KEY cannot be empty");
        }

        // Parse endpoint override (optional, has default)
        let api_url = env::var("KDNIAO_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if api_url.trim().is_empty() {
            bail!("KDNIAO_API_URL cannot be empty");
        }

        // Parse timeout (optional, has default)
        let timeout_secs = match env::var("KDNIAO_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .context("KDNIAO_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            business_id,
            app_key,
            api_url,
            timeout_secs,
        })
    }
}
