use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{NewTodo, Todo};

/// Sea-ORM Entity for the todos table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub task: String,
    pub status: String,
    pub priority: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Todo {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            task: model.task,
            status: model.status,
            priority: model.priority,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

// Insert model: id is left to the autoincrement column
impl From<NewTodo> for ActiveModel {
    fn from(input: NewTodo) -> Self {
        let now = chrono::Utc::now();
        ActiveModel {
            id: NotSet,
            task: Set(input.task),
            status: Set(input.status),
            priority: Set(input.priority),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

// Full overwrite keyed by id, refreshing updated_at
impl From<Todo> for ActiveModel {
    fn from(todo: Todo) -> Self {
        ActiveModel {
            id: Set(todo.id),
            task: Set(todo.task),
            status: Set(todo.status),
            priority: Set(todo.priority),
            created_at: Set(todo.created_at),
            updated_at: Set(chrono::Utc::now()),
        }
    }
}
