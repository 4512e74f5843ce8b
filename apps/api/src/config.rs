//! API configuration module.
//!
//! Configuration is loaded from environment variables (optionally seeded
//! from a `.env` file by `main`). Database settings are mandatory; everything
//! else falls back to a default.

use std::env;
use std::time::Duration;

use laundry_db::PgConnectOptions;

/// Database connection settings (`DB_*`).
#[derive(Clone)]
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub driver: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DbSettings {
    /// Connection options built field by field, so credentials need no
    /// URL escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl std::fmt::Debug for DbSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("driver", &self.driver)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

/// API configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listener host
    pub api_host: String,

    /// Listener port
    pub api_port: u16,

    /// Page size used when a list request sends `limit=0`
    pub default_rows_per_page: i64,

    /// JWT secret key for signing tokens
    pub jwt_secret: String,

    /// JWT access token lifetime in seconds
    pub jwt_access_lifetime_secs: i64,

    /// `iss` claim of issued tokens
    pub jwt_issuer: String,

    pub db: DbSettings,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (the environment in production,
    /// a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, ConfigError> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingRequired(key.to_string()))
        };
        let or_default = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        // The first missing DB variable is reported by name.
        let host = required("DB_HOST")?;
        let port = required("DB_PORT")?;
        let name = required("DB_NAME")?;
        let user = required("DB_USER")?;
        let password = required("DB_PASSWORD")?;
        let driver = required("DB_DRIVER")?;

        let driver = driver.to_lowercase();
        if driver != "postgres" && driver != "postgresql" {
            return Err(ConfigError::UnsupportedDriver(driver));
        }

        let db = DbSettings {
            host,
            port: port
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_PORT".to_string()))?,
            name,
            user,
            password,
            driver,
            max_connections: or_default("DB_MAX_CONNECTIONS", "10")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,
            acquire_timeout_secs: or_default("DB_ACQUIRE_TIMEOUT_SECS", "30")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_ACQUIRE_TIMEOUT_SECS".to_string()))?,
        };

        let default_rows_per_page: i64 = or_default("DEFAULT_ROWS_PER_PAGE", "10")
            .parse()
            .map_err(|_| ConfigError::InvalidValue("DEFAULT_ROWS_PER_PAGE".to_string()))?;
        if default_rows_per_page <= 0 {
            return Err(ConfigError::InvalidValue("DEFAULT_ROWS_PER_PAGE".to_string()));
        }

        let config = AppConfig {
            api_host: or_default("API_HOST", "0.0.0.0"),

            api_port: or_default("API_PORT", "8080")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("API_PORT".to_string()))?,

            default_rows_per_page,

            // In production, this MUST be set via environment variable
            jwt_secret: or_default("JWT_SECRET", "laundry-dev-secret-change-in-production"),

            jwt_access_lifetime_secs: or_default("JWT_ACCESS_LIFETIME_SECS", "3600") // 1 hour
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JWT_ACCESS_LIFETIME_SECS".to_string()))?,

            jwt_issuer: or_default("JWT_ISSUER", "laundry-api"),

            db,
        };

        Ok(config)
    }

    /// `host:port` for the TCP listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Unsupported DB_DRIVER {0:?}, expected postgres")]
    UnsupportedDriver(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DB_HOST", "localhost"),
            ("DB_PORT", "5432"),
            ("DB_NAME", "laundry"),
            ("DB_USER", "laundry"),
            ("DB_PASSWORD", "secret"),
            ("DB_DRIVER", "postgres"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = load(&base_env()).unwrap();

        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.default_rows_per_page, 10);
        assert_eq!(config.jwt_access_lifetime_secs, 3600);
        assert_eq!(config.db.max_connections, 10);
        assert_eq!(config.db.acquire_timeout(), Duration::from_secs(30));

        let options = config.db.connect_options();
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_database(), Some("laundry"));
    }

    #[test]
    fn test_reserved_characters_in_password() {
        let mut vars = base_env();
        vars.insert("DB_HOST", "db.internal");
        vars.insert("DB_PASSWORD", "p@ss/w#rd");

        let options = load(&vars).unwrap().db.connect_options();

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "laundry");
        assert_eq!(options.get_database(), Some("laundry"));
    }

    #[test]
    fn test_acquire_timeout_override() {
        let mut vars = base_env();
        vars.insert("DB_ACQUIRE_TIMEOUT_SECS", "5");
        assert_eq!(load(&vars).unwrap().db.acquire_timeout(), Duration::from_secs(5));

        vars.insert("DB_ACQUIRE_TIMEOUT_SECS", "soon");
        assert!(matches!(load(&vars), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_missing_db_variable_is_named() {
        for key in ["DB_HOST", "DB_PORT", "DB_NAME", "DB_USER", "DB_PASSWORD", "DB_DRIVER"] {
            let mut vars = base_env();
            vars.remove(key);

            match load(&vars) {
                Err(ConfigError::MissingRequired(name)) => assert_eq!(name, key),
                other => panic!("expected MissingRequired({key}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut vars = base_env();
        vars.insert("DB_PASSWORD", "  ");

        assert!(matches!(load(&vars), Err(ConfigError::MissingRequired(_))));
    }

    #[test]
    fn test_rejects_other_drivers() {
        let mut vars = base_env();
        vars.insert("DB_DRIVER", "mysql");

        assert!(matches!(load(&vars), Err(ConfigError::UnsupportedDriver(_))));
    }

    #[test]
    fn test_invalid_numbers() {
        let mut vars = base_env();
        vars.insert("DB_PORT", "not-a-port");
        assert!(matches!(load(&vars), Err(ConfigError::InvalidValue(_))));

        let mut vars = base_env();
        vars.insert("DEFAULT_ROWS_PER_PAGE", "0");
        assert!(matches!(load(&vars), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_debug_hides_password() {
        let config = load(&base_env()).unwrap();
        assert!(!format!("{:?}", config.db).contains("\"secret\""));
    }
}
