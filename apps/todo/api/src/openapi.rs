use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::api::health::healthz),
    components(
        schemas(axum_helpers::ErrorResponse, crate::api::health::HealthzResponse)
    ),
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "Create, list, update and delete todo items"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    tags(
        (name = "health", description = "Service liveness")
    ),
    nest(
        (path = "/v1/todos", api = domain_todos::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
