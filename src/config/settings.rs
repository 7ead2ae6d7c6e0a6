use chrono::Duration;

use crate::config::errors::ConfigError;
use crate::config::{EnvironmentProvider, SystemEnvironment};

const DEFAULT_DATABASE_URL: &str = "sqlite://clubreview.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;
const MIN_PEPPER_LENGTH: usize = 16;

/// Process-wide settings, resolved once at startup
#[derive(Clone)]
pub struct Settings {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub password_pepper: String,
    pub session_ttl_hours: i64,
}

impl Settings {
    /// Load settings from the given environment
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `DATABASE_URL` | `sqlite://clubreview.db?mode=rwc` |
    /// | `HOST` | `0.0.0.0` |
    /// | `PORT` | `3000` |
    /// | `PASSWORD_PEPPER` | required, at least 16 characters |
    /// | `SESSION_TTL_HOURS` | `24` |
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, ConfigError> {
        let database_url = env
            .get_var("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let server_host = env
            .get_var("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let server_port = match env.get_var("PORT") {
            Some(value) => parse_port(&value)?,
            None => DEFAULT_PORT,
        };

        let password_pepper = env
            .get_var("PASSWORD_PEPPER")
            .ok_or(ConfigError::Missing { name: "PASSWORD_PEPPER" })?;
        if password_pepper.len() < MIN_PEPPER_LENGTH {
            return Err(ConfigError::Invalid {
                name: "PASSWORD_PEPPER",
                reason: format!("must be at least {} characters", MIN_PEPPER_LENGTH),
            });
        }

        let session_ttl_hours = match env.get_var("SESSION_TTL_HOURS") {
            Some(value) => parse_ttl_hours(&value)?,
            None => DEFAULT_SESSION_TTL_HOURS,
        };

        Ok(Self {
            database_url,
            server_host,
            server_port,
            password_pepper,
            session_ttl_hours,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_provider(&SystemEnvironment)
    }

    /// Defaults with an explicit database URL and pepper; used by tests and tools
    pub fn with_defaults(database_url: impl Into<String>, password_pepper: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            password_pepper: password_pepper.into(),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
        }
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::hours(self.session_ttl_hours)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    match value.trim().parse::<u16>() {
        Ok(port) if port >= 1 => Ok(port),
        _ => Err(ConfigError::Invalid {
            name: "PORT",
            reason: format!("'{}' is not a port in 1..=65535", value),
        }),
    }
}

fn parse_ttl_hours(value: &str) -> Result<i64, ConfigError> {
    match value.trim().parse::<i64>() {
        Ok(hours) if hours > 0 => Ok(hours),
        _ => Err(ConfigError::Invalid {
            name: "SESSION_TTL_HOURS",
            reason: format!("'{}' is not a positive number of hours", value),
        }),
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("password_pepper", &"<redacted>")
            .field("session_ttl_hours", &self.session_ttl_hours)
            .finish()
    }
}
