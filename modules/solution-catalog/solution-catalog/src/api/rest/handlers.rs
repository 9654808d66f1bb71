//! REST handlers for the Solution Catalog module.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;

use super::dto::{
    AddEnvironmentRequest, EnvironmentDto, InstallModuleRequest, ListModulesQuery, ModuleDto,
    ReadmeDto, SolutionDto,
};
use super::error::Problem;
use crate::domain::service::{ModuleCatalogService, SolutionRegistryService};

pub type SolutionCatalogResult<T> = Result<T, Problem>;

fn invalid_body(rejection: &JsonRejection) -> Problem {
    Problem::new(
        StatusCode::BAD_REQUEST,
        "Invalid request body",
        rejection.body_text(),
    )
    .with_type("https://errors.hyperspot.com/SOLUTION_CATALOG_VALIDATION")
    .with_code("SOLUTION_CATALOG_VALIDATION")
}

/// GET /solution-catalog/v1/modules
///
/// List catalog modules, filtered by `q` when present.
#[utoipa::path(
    get,
    path = "/solution-catalog/v1/modules",
    tag = "modules",
    params(ListModulesQuery),
    responses((status = 200, description = "Catalog modules", body = [ModuleDto]))
)]
pub async fn list_modules(
    Extension(catalog): Extension<Arc<ModuleCatalogService>>,
    Query(query): Query<ListModulesQuery>,
) -> Json<Vec<ModuleDto>> {
    let modules = match query.q {
        Some(q) => catalog.search(&q),
        None => catalog.list(),
    };
    Json(modules.into_iter().map(Into::into).collect())
}

/// GET /solution-catalog/v1/modules/{module_id}
#[utoipa::path(
    get,
    path = "/solution-catalog/v1/modules/{module_id}",
    tag = "modules",
    params(("module_id" = String, Path, description = "Module identifier")),
    responses(
        (status = 200, description = "Catalog module", body = ModuleDto),
        (status = 404, description = "Unknown module", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_module(
    Extension(catalog): Extension<Arc<ModuleCatalogService>>,
    Path(module_id): Path<String>,
) -> SolutionCatalogResult<Json<ModuleDto>> {
    let module = catalog.get(&module_id)?;
    Ok(Json(module.into()))
}

/// GET /solution-catalog/v1/modules/{module_id}/readme
///
/// Always succeeds. The HTML is empty when no README can be fetched.
#[utoipa::path(
    get,
    path = "/solution-catalog/v1/modules/{module_id}/readme",
    tag = "modules",
    params(("module_id" = String, Path, description = "Module identifier")),
    responses((status = 200, description = "Rendered README", body = ReadmeDto))
)]
pub async fn get_module_readme(
    Extension(catalog): Extension<Arc<ModuleCatalogService>>,
    Path(module_id): Path<String>,
) -> Json<ReadmeDto> {
    let html = catalog.readme(&module_id).await;
    Json(ReadmeDto { html })
}

/// GET /solution-catalog/v1/solutions
#[utoipa::path(
    get,
    path = "/solution-catalog/v1/solutions",
    tag = "solutions",
    responses((status = 200, description = "Solutions", body = [SolutionDto]))
)]
pub async fn list_solutions(
    Extension(registry): Extension<Arc<SolutionRegistryService>>,
) -> Json<Vec<SolutionDto>> {
    Json(registry.list().into_iter().map(Into::into).collect())
}

/// GET /solution-catalog/v1/solutions/{solution_id}
#[utoipa::path(
    get,
    path = "/solution-catalog/v1/solutions/{solution_id}",
    tag = "solutions",
    params(("solution_id" = String, Path, description = "Solution identifier")),
    responses(
        (status = 200, description = "Solution", body = SolutionDto),
        (status = 404, description = "Unknown solution", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_solution(
    Extension(registry): Extension<Arc<SolutionRegistryService>>,
    Path(solution_id): Path<String>,
) -> SolutionCatalogResult<Json<SolutionDto>> {
    let solution = registry.get(&solution_id)?;
    Ok(Json(solution.into()))
}

/// GET /solution-catalog/v1/solutions/{solution_id}/environments
#[utoipa::path(
    get,
    path = "/solution-catalog/v1/solutions/{solution_id}/environments",
    tag = "solutions",
    params(("solution_id" = String, Path, description = "Solution identifier")),
    responses(
        (status = 200, description = "Environments of the solution", body = [EnvironmentDto]),
        (status = 404, description = "Unknown solution", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn list_environments(
    Extension(registry): Extension<Arc<SolutionRegistryService>>,
    Path(solution_id): Path<String>,
) -> SolutionCatalogResult<Json<Vec<EnvironmentDto>>> {
    let environments = registry.environments(&solution_id)?;
    Ok(Json(environments.into_iter().map(Into::into).collect()))
}

/// POST /solution-catalog/v1/solutions/{solution_id}/environments
///
/// Add a stopped environment. Responds with every environment of the solution.
#[utoipa::path(
    post,
    path = "/solution-catalog/v1/solutions/{solution_id}/environments",
    tag = "solutions",
    params(("solution_id" = String, Path, description = "Solution identifier")),
    request_body = AddEnvironmentRequest,
    responses(
        (status = 201, description = "Environment added", body = [EnvironmentDto]),
        (status = 400, description = "Invalid input", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Unknown solution", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn add_environment(
    Extension(registry): Extension<Arc<SolutionRegistryService>>,
    Path(solution_id): Path<String>,
    payload: Result<Json<AddEnvironmentRequest>, JsonRejection>,
) -> SolutionCatalogResult<(StatusCode, Json<Vec<EnvironmentDto>>)> {
    let Json(req) = payload.map_err(|e| invalid_body(&e))?;
    let environments = registry.add_environment(&solution_id, &req.into())?;
    Ok((
        StatusCode::CREATED,
        Json(environments.into_iter().map(Into::into).collect()),
    ))
}

/// POST /solution-catalog/v1/solutions/{solution_id}/environments/{environment_id}/modules
///
/// Install a module into a development environment.
#[utoipa::path(
    post,
    path = "/solution-catalog/v1/solutions/{solution_id}/environments/{environment_id}/modules",
    tag = "solutions",
    params(
        ("solution_id" = String, Path, description = "Solution identifier"),
        ("environment_id" = String, Path, description = "Environment identifier")
    ),
    request_body = InstallModuleRequest,
    responses(
        (status = 201, description = "Module installed", body = EnvironmentDto),
        (status = 400, description = "Invalid input", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Unknown solution or environment", body = Problem, content_type = "application/problem+json"),
        (status = 409, description = "Module already installed", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Not a development environment", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn install_module(
    Extension(registry): Extension<Arc<SolutionRegistryService>>,
    Path((solution_id, environment_id)): Path<(String, String)>,
    payload: Result<Json<InstallModuleRequest>, JsonRejection>,
) -> SolutionCatalogResult<(StatusCode, Json<EnvironmentDto>)> {
    let Json(req) = payload.map_err(|e| invalid_body(&e))?;
    let environment =
        registry.install_module(&solution_id, &environment_id, &req.module_id, &req.version)?;
    Ok((StatusCode::CREATED, Json(environment.into())))
}
