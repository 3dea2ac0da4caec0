use std::time::Duration;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{rejection::GraphQLRejection, GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    response::Html,
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::gql::ApiSchema;
use crate::state::AppState;

#[derive(Clone)]
struct RouterState {
    app: AppState,
    schema: ApiSchema,
}

/// Build the Axum router with health endpoint and the single GraphQL endpoint.
pub fn build_router(state: AppState, schema: ApiSchema) -> Router {
    let allowed_origins: Vec<HeaderValue> = state
        .config()
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    Router::new()
        // Simple liveness check; also proves store connectivity.
        .route("/health", get(health))
        .route("/graphql", get(graphiql).post(graphql_handler))
        .with_state(RouterState { app: state, schema })
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE]),
        )
}

/// Malformed payloads are answered with `AppError::BadRequest` before any resolver runs.
async fn graphql_handler(
    State(state): State<RouterState>,
    req: Result<GraphQLRequest, GraphQLRejection>,
) -> Result<GraphQLResponse, AppError> {
    let req = req.map_err(|rejection| {
        AppError::BadRequest(format!("Invalid GraphQL request: {}", rejection.0))
    })?;
    Ok(state.schema.execute(req.into_inner()).await.into())
}

/// Interactive schema explorer, served only when `GRAPHIQL=true`.
async fn graphiql(State(state): State<RouterState>) -> Result<Html<String>, AppError> {
    if !state.app.config().graphiql {
        return Err(AppError::NotFound);
    }
    Ok(Html(GraphiQLSource::build().endpoint("/graphql").finish()))
}

async fn health(State(state): State<RouterState>) -> Result<&'static str, AppError> {
    state.app.store.ping().await?;
    Ok("ok")
}
