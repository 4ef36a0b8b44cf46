// src/config.rs

use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(120_000);

pub const URL_VAR: &str = "HUMANISER_URL";
pub const TIMEOUT_VAR: &str = "HUMANISER_TIMEOUT_MS";

/// Where the humanise service lives and how long we wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Explicit values win; the environment is only consulted for settings
    /// left as `None`.
    pub fn from_env_with(
        url: Option<&str>,
        timeout_ms: Option<u64>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(overriding(url, timeout_ms, |key| std::env::var(key).ok()))
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(url) = lookup(URL_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(&url)?;
        }

        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout {
                    var: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            config = config.with_timeout(Duration::from_millis(millis));
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(url.to_string()));
        }
        self.base_url = url.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }

    /// A zero timeout means wait indefinitely.
    pub fn request_timeout(&self) -> Option<Duration> {
        if self.timeout.is_zero() {
            None
        } else {
            Some(self.timeout)
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Wraps `lookup` so that the given values answer for their variables.
pub fn overriding<F>(
    url: Option<&str>,
    timeout_ms: Option<u64>,
    lookup: F,
) -> impl Fn(&str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let url = url.map(str::to_string);
    let timeout = timeout_ms.map(|ms| ms.to_string());
    move |key| match key {
        URL_VAR if url.is_some() => url.clone(),
        TIMEOUT_VAR if timeout.is_some() => timeout.clone(),
        _ => lookup(key),
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
