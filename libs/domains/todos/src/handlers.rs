use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::dto::{
    CreateTodoRequest, TodoQueryParams, TodoResponse, UpdateTodoRequest, UpdateTodoRequestBody,
};
use crate::error::{TodoError, TodoResult};
use crate::models::Priority;
use crate::repository::TodoRepository;
use crate::service::TodoService;

pub const TODOS_TAG: &str = "todos";

/// OpenAPI documentation for Todos API
#[derive(OpenApi)]
#[openapi(
    paths(list_todos, create_todo, get_todo, update_todo, delete_todo),
    components(
        schemas(TodoResponse, CreateTodoRequest, UpdateTodoRequestBody, TodoQueryParams),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TODOS_TAG, description = "Todo management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the todo router with all HTTP endpoints
pub fn router<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route(
            "/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(shared_service)
}

/// List todos, optionally filtered by task substring and status
#[utoipa::path(
    get,
    path = "",
    tag = TODOS_TAG,
    params(TodoQueryParams),
    responses(
        (status = 200, description = "Todos ordered by priority", body = Vec<TodoResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_todos<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    Query(params): Query<TodoQueryParams>,
) -> TodoResult<Json<Vec<TodoResponse>>> {
    let todos = service.find_all(params.into()).await?;
    Ok(Json(todos))
}

/// Create a new todo
#[utoipa::path(
    post,
    path = "",
    tag = TODOS_TAG,
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created successfully", body = TodoResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTodoRequest>,
) -> TodoResult<impl IntoResponse> {
    if Priority::from_wire(&input.priority).is_none() {
        return Err(TodoError::Validation("invalid priority".to_string()));
    }

    let todo = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Get a todo by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TODOS_TAG,
    params(
        ("id" = i32, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo found", body = TodoResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    IdPath(id): IdPath,
) -> TodoResult<Json<TodoResponse>> {
    let todo = service.find(id).await?;
    Ok(Json(todo))
}

/// Partially update a todo
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TODOS_TAG,
    params(
        ("id" = i32, Path, description = "Todo ID")
    ),
    request_body = UpdateTodoRequestBody,
    responses(
        (status = 200, description = "Todo updated successfully", body = TodoResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateTodoRequestBody>,
) -> TodoResult<Json<TodoResponse>> {
    let todo = service.update(UpdateTodoRequest::new(id, body)).await?;
    Ok(Json(todo))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TODOS_TAG,
    params(
        ("id" = i32, Path, description = "Todo ID")
    ),
    responses(
        (status = 204, description = "Todo deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    IdPath(id): IdPath,
) -> TodoResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
