use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{TodoError, TodoResult},
    models::{NewTodo, SortOrder, Todo, TodoQuery},
    repository::{TodoRepository, parse_order},
};

/// SQLite-backed repository using Sea-ORM
#[derive(Clone)]
pub struct SqliteTodoRepository {
    db: DatabaseConnection,
}

impl SqliteTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn create(&self, input: NewTodo) -> TodoResult<Todo> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(todo_id = model.id, "Created todo");
        Ok(model.into())
    }

    async fn update(&self, todo: Todo) -> TodoResult<Todo> {
        let id = todo.id;
        let active_model: entity::ActiveModel = todo.into();

        // Upsert: the row is written whether or not it still exists
        entity::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(entity::Column::Id)
                    .update_columns([
                        entity::Column::Task,
                        entity::Column::Status,
                        entity::Column::Priority,
                        entity::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| TodoError::Storage(format!("todo {id} missing after write")))?;

        tracing::info!(todo_id = id, "Updated todo");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> TodoResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(TodoError::NotFound(id));
        }

        tracing::info!(todo_id = id, "Deleted todo");
        Ok(())
    }

    async fn find(&self, id: i32) -> TodoResult<Todo> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(TodoError::NotFound(id))
    }

    async fn find_all(&self, query: TodoQuery) -> TodoResult<Vec<Todo>> {
        let order = match parse_order(&query.order)? {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let mut select = entity::Entity::find();

        // instr() is case-sensitive and treats % and _ literally, unlike LIKE
        if !query.task.is_empty() {
            select = select.filter(Expr::cust_with_values(
                "instr(\"task\", ?) > 0",
                [query.task],
            ));
        }

        if !query.status.is_empty() {
            select = select.filter(entity::Column::Status.eq(query.status));
        }

        let models = select
            .order_by(entity::Column::Priority, order)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
