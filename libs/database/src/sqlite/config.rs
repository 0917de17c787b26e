use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse, env_required};

/// Filename that selects a private in-memory database
pub const MEMORY_FILENAME: &str = ":memory:";

const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// SQLite database configuration
///
/// Holds the database file and connection pool settings.
/// It can be constructed manually or loaded from environment variables (with `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::sqlite::SqliteConfig;
///
/// let config = SqliteConfig::new("todos.db");
/// let config = SqliteConfig::in_memory();
/// let config = SqliteConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    /// Database file path, or `:memory:`
    pub filename: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Enable SQL query logging
    pub sqlx_logging: bool,
}

impl SqliteConfig {
    /// Create a config for a database file, created on first connect if missing
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Create a config for an in-memory database
    pub fn in_memory() -> Self {
        Self::new(MEMORY_FILENAME)
    }

    pub fn is_in_memory(&self) -> bool {
        self.filename == MEMORY_FILENAME
    }

    /// Connection URL understood by the sqlx SQLite driver
    pub fn url(&self) -> String {
        if self.is_in_memory() {
            "sqlite::memory:".to_string()
        } else {
            format!("sqlite://{}?mode=rwc", self.filename)
        }
    }

    /// Convert this config into SeaORM ConnectOptions
    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url());
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(LevelFilter::Debug);

        // Each connection to :memory: is its own database; keep exactly one alive
        if self.is_in_memory() {
            opt.max_connections(1)
                .min_connections(1)
                .idle_timeout(MEMORY_CONNECTION_LIFETIME)
                .max_lifetime(MEMORY_CONNECTION_LIFETIME);
        }

        opt
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            filename: MEMORY_FILENAME.to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            sqlx_logging: false,
        }
    }
}

/// Load SqliteConfig from environment variables
///
/// Environment variables:
/// - `DB_FILENAME` (required) - database file, or `:memory:`
/// - `DB_MAX_CONNECTIONS` (optional, default: 10)
/// - `DB_MIN_CONNECTIONS` (optional, default: 1)
/// - `DB_CONNECT_TIMEOUT_SECS` (optional, default: 8)
/// - `DB_ACQUIRE_TIMEOUT_SECS` (optional, default: 8)
/// - `DB_SQLX_LOGGING` (optional, default: false)
#[cfg(feature = "config")]
impl FromEnv for SqliteConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            filename: env_required("DB_FILENAME")?,
            max_connections: env_parse("DB_MAX_CONNECTIONS", "10")?,
            min_connections: env_parse("DB_MIN_CONNECTIONS", "1")?,
            connect_timeout_secs: env_parse("DB_CONNECT_TIMEOUT_SECS", "8")?,
            acquire_timeout_secs: env_parse("DB_ACQUIRE_TIMEOUT_SECS", "8")?,
            sqlx_logging: env_parse("DB_SQLX_LOGGING", "false")?,
        })
    }
}
