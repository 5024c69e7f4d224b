//! Application route configuration.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{owner_routes, specialty_routes, vet_routes};
use super::openapi::ApiDoc;
use super::state::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root and health endpoints
        .route("/", get(root))
        .route("/health", get(health_check))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Record endpoints
        .nest("/owners", owner_routes())
        .nest("/vets", vet_routes())
        .nest("/specialties", specialty_routes())
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint response
#[derive(Serialize)]
struct RootResponse {
    name: &'static str,
    version: &'static str,
    documentation: &'static str,
}

/// Root endpoint
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        name: "Pet Clinic API",
        version: env!("CARGO_PKG_VERSION"),
        documentation: "/swagger-ui",
    })
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
