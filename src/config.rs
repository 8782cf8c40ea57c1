use std::{env, str::FromStr, time::Duration};

use dotenvy::dotenv;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/v1/";

/// Value the length selector starts with.
pub const DEFAULT_LENGTH: &str = "medium";
/// Slider value and label shown for temperature after a reset.
pub const DEFAULT_TEMPERATURE_LABEL: &str = "0.8";
/// Slider value and label shown for top-p after a reset.
pub const DEFAULT_TOP_P_LABEL: &str = "0.95";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root of the story API, always ending in `/` so endpoints join under it.
    pub api_base_url: Url,
    /// `None` leaves requests to run until the transport gives up.
    pub request_timeout: Option<Duration>,
    pub form_defaults: FormDefaults,
}

/// Values the form controls fall back to on first render and on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDefaults {
    pub length: String,
    pub temperature: String,
    pub top_p: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH.to_string(),
            temperature: DEFAULT_TEMPERATURE_LABEL.to_string(),
            top_p: DEFAULT_TOP_P_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid URL for {name}: {value}")]
    InvalidUrl { name: &'static str, value: String },
    #[error("Invalid number for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env if present
        let _ = dotenv();

        let raw_base =
            env::var("STORY_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());
        let api_base_url = parse_base_url("STORY_API_BASE_URL", &raw_base)?;

        let request_timeout = parse_optional::<u64>("STORY_API_TIMEOUT_SECS")?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Self {
            api_base_url,
            request_timeout,
            form_defaults: FormDefaults::default(),
        })
    }

    pub fn with_base_url(base: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_base_url("api_base_url", base)?,
            request_timeout: None,
            form_defaults: FormDefaults::default(),
        })
    }
}

/// Parses `raw` and appends a trailing slash so `Url::join` keeps the last path segment.
pub fn parse_base_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidUrl {
        name,
        value: raw.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            name,
            value: raw.to_string(),
        });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_optional<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(v) => v
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name: key, value: v }),
        Err(_) => Ok(None),
    }
}
