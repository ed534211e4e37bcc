//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PASSWORD` - `PostgreSQL` password (must be non-empty)
//!
//! ## Read but not validated
//! - `DB_HOST` - `PostgreSQL` host (empty if unset; the connection attempt reports it)
//! - `DB_NAME` - `PostgreSQL` database name (empty if unset)
//!
//! ## Optional
//! - `DB_USER` - `PostgreSQL` user (default: postgres)
//! - `DB_PORT` - `PostgreSQL` port (default: 5432)
//! - `SERVER_HOST` - Bind address (default: 0.0.0.0)
//! - `SERVER_PORT` - Listen port (default: 8080)
//! - `GEOCODING_BASE_URL` - Geocoding endpoint (default: <https://geoapi.heartrails.com/api/json>)
//! - `GEOCODING_TIMEOUT_SECS` - Outbound request timeout (default: 10)
//! - `LOG_FORMAT` - `json` for structured logs, anything else for text
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;
use url::Url;

/// Default geocoding endpoint (HeartRails Geo API).
pub const DEFAULT_GEOCODING_BASE_URL: &str = "https://geoapi.heartrails.com/api/json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Access log database settings
    pub database: DatabaseConfig,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Outbound geocoding API settings
    pub geocoding: GeocodingConfig,
    /// Emit JSON logs instead of text
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Fraction of requests traced by Sentry
    pub sentry_traces_sample_rate: f32,
}

/// `PostgreSQL` connection settings.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: SecretString,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Geocoding API settings.
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    /// Endpoint queried with `method=searchByPostal&postal=<code>`
    pub base_url: Url,
    /// Timeout for a single lookup
    pub timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PASSWORD` is missing or empty, or if an
    /// optional variable is set to a value that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_vars<F>(vars: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseConfig::from_vars(&vars)?;
        let host = parse_env_or_default(&vars, "SERVER_HOST", "0.0.0.0")?;
        let port = parse_env_or_default(&vars, "SERVER_PORT", "8080")?;
        let geocoding = GeocodingConfig::from_vars(&vars)?;
        let log_json = vars("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json"));
        let sentry_dsn = get_optional_env(&vars, "SENTRY_DSN");
        let sentry_environment = get_optional_env(&vars, "SENTRY_ENVIRONMENT");
        let sentry_traces_sample_rate =
            parse_env_or_default(&vars, "SENTRY_TRACES_SAMPLE_RATE", "0.0")?;

        Ok(Self {
            database,
            host,
            port,
            geocoding,
            log_json,
            sentry_dsn,
            sentry_environment,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl DatabaseConfig {
    fn from_vars<F>(vars: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: vars("DB_HOST").unwrap_or_default(),
            port: parse_env_or_default(vars, "DB_PORT", "5432")?,
            name: vars("DB_NAME").unwrap_or_default(),
            user: get_env_or_default(vars, "DB_USER", "postgres"),
            password: get_required_secret(vars, "PASSWORD")?,
        })
    }

    /// Connection options for the access log database.
    ///
    /// TLS is disabled, matching the deployment this service runs in.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(self.password.expose_secret())
            .ssl_mode(PgSslMode::Disable)
    }
}

impl GeocodingConfig {
    fn from_vars<F>(vars: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = parse_env_or_default(vars, "GEOCODING_BASE_URL", DEFAULT_GEOCODING_BASE_URL)?;
        let timeout_secs: u64 = parse_env_or_default(vars, "GEOCODING_TIMEOUT_SECS", "10")?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required, non-empty variable as a secret.
fn get_required_secret<F>(vars: &F, key: &str) -> Result<SecretString, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match vars(key) {
        Some(value) if !value.is_empty() => Ok(SecretString::from(value)),
        _ => Err(ConfigError::MissingEnvVar(key.to_string())),
    }
}

/// Get an optional variable, treating an empty value as unset.
fn get_optional_env<F>(vars: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    vars(key).filter(|v| !v.is_empty())
}

/// Get a variable with a default value.
fn get_env_or_default<F>(vars: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    get_optional_env(vars, key).unwrap_or_else(|| default.to_string())
}

/// Get a variable with a default value and parse it.
fn parse_env_or_default<F, T>(vars: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(vars, key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_missing_password_is_fatal() {
        let err = load(&[("DB_HOST", "db"), ("DB_NAME", "postal")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "PASSWORD"));
    }

    #[test]
    fn test_empty_password_is_fatal() {
        let err = load(&[("PASSWORD", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(_)));
    }

    #[test]
    fn test_host_and_name_are_not_validated() {
        let config = load(&[("PASSWORD", "hunter2")]).unwrap();
        assert_eq!(config.database.host, "");
        assert_eq!(config.database.name, "");
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DB_HOST", "db"), ("DB_NAME", "postal"), ("PASSWORD", "pw")]).unwrap();

        assert_eq!(config.database.host, "db");
        assert_eq!(config.database.name, "postal");
        assert_eq!(config.database.user, "postgres");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.geocoding.base_url.as_str(), DEFAULT_GEOCODING_BASE_URL);
        assert_eq!(config.geocoding.timeout, Duration::from_secs(10));
        assert!(!config.log_json);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PASSWORD", "pw"),
            ("DB_USER", "app"),
            ("DB_PORT", "6543"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "3000"),
            ("GEOCODING_BASE_URL", "http://localhost:9999/api/json"),
            ("GEOCODING_TIMEOUT_SECS", "3"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();

        assert_eq!(config.database.user, "app");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(
            config.geocoding.base_url.as_str(),
            "http://localhost:9999/api/json"
        );
        assert_eq!(config.geocoding.timeout, Duration::from_secs(3));
        assert!(config.log_json);
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("PASSWORD", "pw"), ("SERVER_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "SERVER_PORT"));
    }

    #[test]
    fn test_invalid_geocoding_url() {
        let err = load(&[("PASSWORD", "pw"), ("GEOCODING_BASE_URL", "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_database_config_debug_redacts_password() {
        let config = load(&[("DB_HOST", "db.internal"), ("PASSWORD", "super_secret_pw")]).unwrap();

        let debug_output = format!("{:?}", config.database);

        assert!(debug_output.contains("db.internal"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_pw"));
    }
}
