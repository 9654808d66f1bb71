//! Route registration for the Solution Catalog REST API.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers;
use super::openapi::SolutionCatalogApiDoc;
use crate::domain::service::{ModuleCatalogService, SolutionRegistryService};

/// Base path shared by every route of the module.
pub const BASE_PATH: &str = "/solution-catalog/v1";

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(SolutionCatalogApiDoc::openapi())
}

/// Mounts every Solution Catalog route under [`BASE_PATH`].
#[must_use]
#[allow(clippy::needless_pass_by_value)] // Arc is intentionally passed by value for Extension layer
pub fn register_routes(
    router: Router,
    catalog: Arc<ModuleCatalogService>,
    registry: Arc<SolutionRegistryService>,
) -> Router {
    let routes = Router::new()
        .route("/modules", get(handlers::list_modules))
        .route("/modules/{module_id}", get(handlers::get_module))
        .route("/modules/{module_id}/readme", get(handlers::get_module_readme))
        .route("/solutions", get(handlers::list_solutions))
        .route("/solutions/{solution_id}", get(handlers::get_solution))
        .route(
            "/solutions/{solution_id}/environments",
            get(handlers::list_environments).post(handlers::add_environment),
        )
        .route(
            "/solutions/{solution_id}/environments/{environment_id}/modules",
            post(handlers::install_module),
        )
        .route("/openapi.json", get(openapi_json))
        .layer(Extension(catalog))
        .layer(Extension(registry))
        .layer(TraceLayer::new_for_http());

    router.nest(BASE_PATH, routes)
}
