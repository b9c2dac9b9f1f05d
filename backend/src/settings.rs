//! Process configuration read from the environment.
//!
//! All variables are read once at startup through [`mockable::Env`] so the
//! parsing rules can be exercised with `MockEnv` in tests.

use std::fmt;
use std::net::SocketAddr;

use mockable::Env;

use crate::domain::ApiKey;
use crate::outbound::persistence::DEFAULT_MAX_SIZE;

pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const API_KEY_ENV: &str = "API_KEY";
pub const BIND_ADDR_ENV: &str = "FOOD_API_BIND_ADDR";
pub const POOL_MAX_SIZE_ENV: &str = "DATABASE_POOL_MAX_SIZE";

/// Listener address used when `FOOD_API_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

const BIND_ADDR_EXPECTED: &str = "a socket address such as 0.0.0.0:8000";
const POOL_MAX_SIZE_EXPECTED: &str = "a positive integer";

/// Errors raised while reading configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// A required variable is unset or blank.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but cannot be parsed.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Validated process configuration.
#[derive(Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub api_key: ApiKey,
    pub bind_addr: SocketAddr,
    pub pool_max_size: u32,
}

impl AppSettings {
    /// Read and validate every setting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use food_catalogue::settings::AppSettings;
    /// use mockable::MockEnv;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().times(0..).returning(|key| match key {
    ///     "DATABASE_URL" => Some("postgres://localhost/food".to_owned()),
    ///     "API_KEY" => Some("s3cret".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// let settings = AppSettings::from_env(&env).expect("valid settings");
    /// assert_eq!(settings.bind_addr.port(), 8000);
    /// assert_eq!(settings.pool_max_size, 10);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingEnv`] when `DATABASE_URL` or `API_KEY`
    /// is unset or blank, and [`SettingsError::InvalidEnv`] when an optional
    /// value does not parse.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, SettingsError> {
        let database_url = required(env, DATABASE_URL_ENV)?;
        let api_key = ApiKey::new(required(env, API_KEY_ENV)?)
            .map_err(|_| SettingsError::MissingEnv { name: API_KEY_ENV })?;
        let bind_addr = bind_addr(env)?;
        let pool_max_size = pool_max_size(env)?;

        Ok(Self {
            database_url,
            api_key,
            bind_addr,
            pool_max_size,
        })
    }
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("database_url", &"<redacted>")
            .field("api_key", &self.api_key)
            .field("bind_addr", &self.bind_addr)
            .field("pool_max_size", &self.pool_max_size)
            .finish()
    }
}

fn required<E: Env>(env: &E, name: &'static str) -> Result<String, SettingsError> {
    match env.string(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(SettingsError::MissingEnv { name }),
    }
}

fn bind_addr<E: Env>(env: &E) -> Result<SocketAddr, SettingsError> {
    let raw = env
        .string(BIND_ADDR_ENV)
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
    raw.trim().parse().map_err(|_| SettingsError::InvalidEnv {
        name: BIND_ADDR_ENV,
        value: raw,
        expected: BIND_ADDR_EXPECTED,
    })
}

fn pool_max_size<E: Env>(env: &E) -> Result<u32, SettingsError> {
    let Some(raw) = env.string(POOL_MAX_SIZE_ENV) else {
        return Ok(DEFAULT_MAX_SIZE);
    };
    match raw.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(SettingsError::InvalidEnv {
            name: POOL_MAX_SIZE_ENV,
            value: raw,
            expected: POOL_MAX_SIZE_EXPECTED,
        }),
    }
}

#[cfg(test)]
mod tests;
