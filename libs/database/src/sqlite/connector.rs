use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqliteConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Open a SQLite database file with default pool settings
///
/// # Example
/// ```ignore
/// use database::sqlite::connect;
///
/// let db = connect("todos.db").await?;
/// ```
pub async fn connect(filename: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(&SqliteConfig::new(filename)).await
}

/// Connect using a SqliteConfig
///
/// With FromEnv (requires `config` feature):
/// ```ignore
/// use database::sqlite::{SqliteConfig, connect_from_config};
/// use core_config::FromEnv;
///
/// let config = SqliteConfig::from_env()?;
/// let db = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &SqliteConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(config.connect_options()).await?;
    info!(filename = %config.filename, "Connected to SQLite database");
    Ok(db)
}

/// Connect with automatic retry on failure
///
/// Uses exponential backoff with jitter; `None` selects the default
/// policy (3 retries starting at 100ms).
///
/// # Example
/// ```ignore
/// use database::sqlite::connect_with_retry;
/// use database::common::RetryConfig;
///
/// let retry_config = RetryConfig::new().with_max_retries(5);
/// let db = connect_with_retry(&config, Some(retry_config)).await?;
/// ```
pub async fn connect_with_retry(
    config: &SqliteConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    match retry_config {
        Some(policy) => retry_with_backoff(|| connect_from_config(config), policy).await,
        None => retry(|| connect_from_config(config)).await,
    }
}

/// Run database migrations using the provided Migrator
///
/// # Arguments
/// * `db` - Database connection
/// * `app_name` - Name of the app for logging (e.g., "todo_api")
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}
