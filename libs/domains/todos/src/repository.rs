use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{TodoError, TodoResult};
use crate::models::{NewTodo, SortOrder, Todo, TodoQuery};

/// Repository trait for Todo persistence
///
/// `update` is a full overwrite keyed by `todo.id` and does not report a
/// missing row; callers check existence with `find` first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a todo, assigning id and timestamps
    async fn create(&self, input: NewTodo) -> TodoResult<Todo>;

    /// Overwrite the row with `todo.id`
    async fn update(&self, todo: Todo) -> TodoResult<Todo>;

    /// Delete by id, `NotFound` when no row matches
    async fn delete(&self, id: i32) -> TodoResult<()>;

    /// Get by id, `NotFound` when no row matches
    async fn find(&self, id: i32) -> TodoResult<Todo>;

    /// Filtered list ordered by priority
    async fn find_all(&self, query: TodoQuery) -> TodoResult<Vec<Todo>>;
}

pub(crate) fn parse_order(token: &str) -> TodoResult<SortOrder> {
    SortOrder::from_token(token)
        .ok_or_else(|| TodoError::Storage(format!("unsupported sort direction: {token}")))
}

#[derive(Debug, Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Todo>,
}

/// In-memory implementation of TodoRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTodoRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, input: NewTodo) -> TodoResult<Todo> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let now = chrono::Utc::now();
        let todo = Todo {
            id: table.last_id,
            task: input.task,
            status: input.status,
            priority: input.priority,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(todo.id, todo.clone());

        tracing::info!(todo_id = todo.id, "Created todo");
        Ok(todo)
    }

    async fn update(&self, todo: Todo) -> TodoResult<Todo> {
        let mut table = self.table.write().await;
        table.last_id = table.last_id.max(todo.id);

        let now = chrono::Utc::now();
        let created_at = table
            .rows
            .get(&todo.id)
            .map(|existing| existing.created_at)
            .unwrap_or(now);
        let stored = Todo {
            created_at,
            updated_at: now,
            ..todo
        };
        table.rows.insert(stored.id, stored.clone());

        tracing::info!(todo_id = stored.id, "Updated todo");
        Ok(stored)
    }

    async fn delete(&self, id: i32) -> TodoResult<()> {
        let mut table = self.table.write().await;

        match table.rows.remove(&id) {
            Some(_) => {
                tracing::info!(todo_id = id, "Deleted todo");
                Ok(())
            }
            None => Err(TodoError::NotFound(id)),
        }
    }

    async fn find(&self, id: i32) -> TodoResult<Todo> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(TodoError::NotFound(id))
    }

    async fn find_all(&self, query: TodoQuery) -> TodoResult<Vec<Todo>> {
        let order = parse_order(&query.order)?;
        let table = self.table.read().await;

        // BTreeMap iteration is by id, so the stable sort keeps id order on ties
        let mut result: Vec<Todo> = table
            .rows
            .values()
            .filter(|todo| query.matches(todo))
            .cloned()
            .collect();

        match order {
            SortOrder::Asc => result.sort_by_key(|todo| todo.priority),
            SortOrder::Desc => result.sort_by(|a, b| b.priority.cmp(&a.priority)),
        }

        Ok(result)
    }
}
