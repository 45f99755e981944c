//! Client configuration baked in at build time.
//!
//! A WASM bundle has no process environment, so values are read with
//! `option_env!` when the crate is compiled:
//!
//! - `COUNTRY_EXPLORER_AUTH_URL`: identity service base URL, default
//!   `http://localhost:3000/api/v1/user`
//! - `COUNTRY_EXPLORER_LOG_LEVEL`: `error`, `warn`, `info` (default),
//!   `debug` or `trace`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:3000/api/v1/user";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Errors produced while parsing client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid COUNTRY_EXPLORER_AUTH_URL: {0} (expected http(s):// or a root-relative path)")]
    InvalidAuthUrl(String),

    #[error("unknown COUNTRY_EXPLORER_LOG_LEVEL: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Identity service root; `login`, `signup` and `user-by` hang off it.
    pub auth_base_url: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { auth_base_url: DEFAULT_AUTH_BASE_URL.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl ClientConfig {
    /// Build config from the compile-time environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("COUNTRY_EXPLORER_AUTH_URL"), option_env!("COUNTRY_EXPLORER_LOG_LEVEL"))
    }

    /// Build config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either value is unusable.
    pub fn from_values(auth_url: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { auth_base_url: parse_auth_url(auth_url)?, log_level: parse_log_level(log_level)? })
    }
}

fn parse_auth_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_AUTH_BASE_URL);
    let valid = raw.starts_with("http://") || raw.starts_with("https://") || raw.starts_with('/');
    if !valid {
        return Err(ConfigError::InvalidAuthUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(level) => level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(level.to_owned())),
    }
}

