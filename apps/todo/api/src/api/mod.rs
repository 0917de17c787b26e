use axum::{Router, middleware, routing::get};

pub mod health;
pub mod todos;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/v1/todos", todos::router(state))
        .route("/v1/healthz", get(health::healthz))
        .layer(middleware::from_fn(observability::metrics_middleware))
}

/// `/ready` (database ping) and `/metrics` (Prometheus text), outside `/api`.
pub fn ops_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
        .route("/metrics", get(observability::metrics_handler))
}
