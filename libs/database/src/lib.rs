//! Database library providing the SQLite connector and shared utilities
//!
//! # Features
//!
//! - `sqlite` (default) - SQLite support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::sqlite::{self, SqliteConfig};
//! use migration::Migrator;
//!
//! let db = sqlite::connect_from_config(&SqliteConfig::new("todos.db")).await?;
//! sqlite::run_migrations::<Migrator>(&db, "todo_api").await?;
//! ```

pub mod common;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use common::DatabaseError;
