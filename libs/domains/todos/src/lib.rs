//! Todos Domain
//!
//! Create, read, update and delete for todo items, with partial-update
//! merging and priority token mapping.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, request validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Partial-update merge, wire mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory / SQLite)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Todo, TodoQuery, Priority, Status
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{handlers, InMemoryTodoRepository, TodoService};
//!
//! let service = TodoService::new(InMemoryTodoRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod dto;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;

pub use dto::{
    CreateTodoRequest, TodoQueryParams, TodoResponse, UpdateTodoRequest, UpdateTodoRequestBody,
};
pub use error::{TodoError, TodoResult};
pub use models::{NewTodo, Priority, SortOrder, Status, Todo, TodoQuery};
pub use repository::{InMemoryTodoRepository, TodoRepository};
pub use service::TodoService;
pub use sqlite::SqliteTodoRepository;
