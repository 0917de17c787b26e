//! SQLite test infrastructure
//!
//! Provides a `TestDatabase` helper backed by a private in-memory SQLite
//! database with all migrations applied.

use database::sqlite::{SqliteConfig, connect_from_config, run_migrations};
use migration::Migrator;
use sea_orm::DatabaseConnection;

/// Test database wrapper
///
/// The database lives as long as its single pooled connection, so it is
/// dropped together with this struct.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        // One connection: every new connection to :memory: is a fresh database
        let config = SqliteConfig {
            max_connections: 1,
            min_connections: 1,
            ..SqliteConfig::in_memory()
        };

        let connection = connect_from_config(&config)
            .await
            .expect("Failed to open in-memory SQLite database");

        run_migrations::<Migrator>(&connection, "test-utils")
            .await
            .expect("Failed to run migrations");

        tracing::debug!("Test database ready (in-memory SQLite)");

        Self { connection }
    }

    /// Clone of the connection handle for building repositories
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
