//! Shared application state handed to route builders.

/// Cloned per router; the connection is a pool handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// SQLite connection pool
    pub db: database::sqlite::DatabaseConnection,
}
