//! Wire representations exchanged with API clients.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{NewTodo, Priority, Status, Todo, TodoQuery};

/// Request body for creating a todo.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateTodoRequest {
    /// Task description
    #[validate(length(min = 1, message = "task is required"))]
    #[schema(example = "buy milk")]
    pub task: String,
    /// One of `low`, `medium`, `high`
    #[validate(length(min = 1, message = "priority is required"))]
    #[schema(example = "high")]
    pub priority: String,
}

impl CreateTodoRequest {
    /// Build the insert model. New todos always start as `created`;
    /// an unknown priority token maps to level 0.
    pub fn into_new_todo(self) -> NewTodo {
        NewTodo {
            task: self.task,
            status: Status::Created.to_string(),
            priority: Priority::from_wire(&self.priority)
                .map(Priority::level)
                .unwrap_or_default(),
        }
    }
}

/// Request body for updating a todo. Omitted or empty fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateTodoRequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// Update request as handed to the service: body plus the path id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    pub id: i32,
    pub task: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl UpdateTodoRequest {
    pub fn new(id: i32, body: UpdateTodoRequestBody) -> Self {
        Self {
            id,
            task: body.task,
            status: body.status,
            priority: body.priority,
        }
    }
}

/// Query string for listing todos.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TodoQueryParams {
    /// Case-sensitive substring of the task text
    pub task: Option<String>,
    /// Exact status to match
    pub status: Option<String>,
    /// Priority sort direction, `asc` or `desc` (default `desc`)
    pub order: Option<String>,
}

impl From<TodoQueryParams> for TodoQuery {
    fn from(params: TodoQueryParams) -> Self {
        Self {
            task: params.task.unwrap_or_default(),
            status: params.status.unwrap_or_default(),
            order: params.order.unwrap_or_default(),
        }
    }
}

/// Todo as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TodoResponse {
    pub id: i32,
    pub task: String,
    pub status: String,
    /// `low`, `medium`, `high`, or empty for an unrecognised stored level
    pub priority: String,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            task: todo.task,
            status: todo.status,
            priority: Priority::wire_token(todo.priority),
        }
    }
}
