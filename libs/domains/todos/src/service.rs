use observability::{Outcome, TodoMetrics};
use std::sync::Arc;
use tracing::instrument;

use crate::dto::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};
use crate::error::{TodoError, TodoResult};
use crate::models::{Priority, Todo, TodoQuery};
use crate::repository::TodoRepository;

/// Service layer for Todo business logic
#[derive(Clone)]
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

fn outcome<T>(result: &TodoResult<T>) -> Outcome {
    match result {
        Ok(_) => Outcome::Success,
        Err(TodoError::NotFound(_)) => Outcome::NotFound,
        Err(_) => Outcome::Error,
    }
}

fn record<T>(operation: &'static str, result: &TodoResult<T>) {
    TodoMetrics::record_operation(operation, outcome(result));
}

/// Merge a partial update onto the stored todo. Empty strings and a zero
/// priority mean "not supplied" and keep the stored value.
fn merge(candidate: Todo, current: Todo) -> Todo {
    Todo {
        id: candidate.id,
        task: if candidate.task.is_empty() {
            current.task
        } else {
            candidate.task
        },
        status: if candidate.status.is_empty() {
            current.status
        } else {
            candidate.status
        },
        priority: if candidate.priority == 0 {
            current.priority
        } else {
            candidate.priority
        },
        created_at: current.created_at,
        updated_at: current.updated_at,
    }
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a todo in the `created` state.
    ///
    /// The priority token is expected to be checked by the caller; an unknown
    /// token is stored as level 0.
    #[instrument(skip(self, input), fields(priority = %input.priority))]
    pub async fn create(&self, input: CreateTodoRequest) -> TodoResult<TodoResponse> {
        let result = self.repository.create(input.into_new_todo()).await;
        record("create", &result);
        result.map(Into::into)
    }

    /// Apply a partial update.
    ///
    /// The todo is loaded first so a missing id fails with `NotFound` before
    /// anything is written. An unknown priority token is ignored.
    #[instrument(skip(self, input), fields(todo_id = input.id))]
    pub async fn update(&self, input: UpdateTodoRequest) -> TodoResult<TodoResponse> {
        let result = self.merge_and_save(input).await;
        record("update", &result);
        result.map(Into::into)
    }

    async fn merge_and_save(&self, input: UpdateTodoRequest) -> TodoResult<Todo> {
        let current = self.repository.find(input.id).await?;

        let candidate = Todo {
            id: input.id,
            task: input.task.unwrap_or_default(),
            status: input.status.unwrap_or_default(),
            priority: input
                .priority
                .as_deref()
                .and_then(Priority::from_wire)
                .map(Priority::level)
                .unwrap_or_default(),
            created_at: current.created_at,
            updated_at: current.updated_at,
        };

        self.repository.update(merge(candidate, current)).await
    }

    /// Delete a todo by id
    #[instrument(skip(self), fields(todo_id = id))]
    pub async fn delete(&self, id: i32) -> TodoResult<()> {
        let result = self.repository.delete(id).await;
        record("delete", &result);
        result
    }

    /// Get a todo by id
    #[instrument(skip(self), fields(todo_id = id))]
    pub async fn find(&self, id: i32) -> TodoResult<TodoResponse> {
        let result = self.repository.find(id).await;
        record("find", &result);
        result.map(Into::into)
    }

    /// List todos matching `query`, ordered by priority
    #[instrument(skip(self))]
    pub async fn find_all(&self, query: TodoQuery) -> TodoResult<Vec<TodoResponse>> {
        let result = self.repository.find_all(query).await;
        record("find_all", &result);

        let todos = result?;
        tracing::debug!(count = todos.len(), "Listed todos");
        Ok(todos.into_iter().map(Into::into).collect())
    }
}
