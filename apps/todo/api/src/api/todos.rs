use axum::Router;
use domain_todos::{SqliteTodoRepository, TodoService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = SqliteTodoRepository::new(state.db.clone());
    let service = TodoService::new(repository);
    handlers::router(service)
}
