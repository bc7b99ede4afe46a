//! Axum HTTP server configuration with GraphQL support

use std::sync::Arc;

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::Value;
use tower_http::{
    compression::{predicate::SizeAbove, CompressionLayer},
    cors::CorsLayer,
    trace::TraceLayer,
    CompressionLevel,
};

use crate::{
    config::ApiConfig,
    errors::ApiResult,
    schema::{build_schema, FeedhubSchema},
};

/// Health check response for liveness probe
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: &'static str,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub schema: Arc<FeedhubSchema>,
    pub playground_enabled: bool,
}

/// Build the Axum application router
pub async fn build_app(db: DatabaseConnection, config: ApiConfig) -> ApiResult<Router> {
    let schema = build_schema(db);

    let app_state = AppState {
        schema: Arc::new(schema),
        playground_enabled: config.playground_enabled,
    };

    // Configure CORS based on allowed origins
    let cors_layer = if config.cors_allowed_origins.contains(&"*".to_string()) {
        // Permissive CORS for development
        CorsLayer::permissive()
    } else {
        // Restrictive CORS with specific origins
        let allowed_origins: Vec<_> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| origin.parse::<axum::http::HeaderValue>().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(allowed_origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
            .allow_credentials(true)
    };

    Ok(Router::new()
        // GraphQL endpoint (queries and mutations)
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        // Health check endpoint for liveness probes
        .route("/healthz", get(healthz_handler))
        .layer(cors_layer)
        // Use zstd compression only for responses > 1KB
        .layer(
            CompressionLayer::new()
                .zstd(true)
                // Use balanced compression to not use too much CPU
                .quality(CompressionLevel::Default)
                .compress_when(SizeAbove::new(1024)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}

/// GraphQL query/mutation handler
async fn graphql_handler(State(state): State<AppState>, Json(request): Json<Value>) -> Response {
    // Parse the GraphQL request envelope { query, variables? }
    let request = match serde_json::from_value::<async_graphql::Request>(request) {
        Ok(req) => req,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "errors": [{
                        "message": format!("Invalid GraphQL request: {}", e)
                    }]
                })),
            )
                .into_response();
        }
    };

    // Execute the query/mutation
    let response = state.schema.execute(request).await;

    // Serialize and return the response
    Json(serde_json::to_value(response).unwrap_or_else(|_| {
        serde_json::json!({
            "errors": [{"message": "Failed to serialize response"}]
        })
    }))
    .into_response()
}

/// GraphQL Playground UI (only enabled if playground_enabled config is true)
async fn graphql_playground(State(state): State<AppState>) -> impl IntoResponse {
    if state.playground_enabled {
        Html(playground_source(GraphQLPlaygroundConfig::new("/graphql"))).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            "GraphQL Playground is disabled. Use POST /graphql for queries.",
        )
            .into_response()
    }
}

/// Liveness probe endpoint - minimal check that process is alive
async fn healthz_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
