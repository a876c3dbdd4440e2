use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::ygoprodeck::DEFAULT_CARDINFO_URL;

/// How long the loading overlay stays up after the fetch settles
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(3000);

const API_URL_VAR: &str = "CARDVIEW_API_URL";
const LOADING_DELAY_VAR: &str = "CARDVIEW_LOADING_DELAY_MS";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be an http(s) URL, got {1:?}")]
    InvalidUrl(&'static str, String),
    #[error("{0} must be a whole number of milliseconds, got {1:?}")]
    InvalidDelay(&'static str, String),
}

/// Application configuration
/// In debug builds: loads from .env file, then the process environment
/// In release builds: process environment only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Card-information endpoint queried once on mount
    pub api_url: String,
    /// Pacing delay before the loading overlay clears
    pub loading_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_CARDINFO_URL.to_string(),
            loading_delay: DEFAULT_LOADING_DELAY,
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from a variable lookup, falling back to defaults for
    /// anything missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = match lookup(API_URL_VAR).map(|raw| parse_api_url(&raw)) {
            Some(Ok(url)) => url,
            Some(Err(e)) => {
                warn!("{}, using default", e);
                defaults.api_url
            }
            None => defaults.api_url,
        };

        let loading_delay = match lookup(LOADING_DELAY_VAR).map(|raw| parse_delay(&raw)) {
            Some(Ok(delay)) => delay,
            Some(Err(e)) => {
                warn!("{}, using default", e);
                defaults.loading_delay
            }
            None => defaults.loading_delay,
        };

        info!(
            "Using card endpoint {} with {}ms loading delay",
            api_url,
            loading_delay.as_millis()
        );

        Self {
            api_url,
            loading_delay,
        }
    }
}

fn parse_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidUrl(API_URL_VAR, raw.to_string()))
    }
}

fn parse_delay(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidDelay(LOADING_DELAY_VAR, raw.to_string()))
}
