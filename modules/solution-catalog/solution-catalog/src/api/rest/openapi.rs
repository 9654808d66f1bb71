//! OpenAPI document for the Solution Catalog REST API.

use utoipa::OpenApi;

use super::dto::{
    AddEnvironmentRequest, EnvironmentDto, EnvironmentModuleDto, InstallModuleRequest,
    ModuleAttributesDto, ModuleComponentDto, ModuleDependencyDto, ModuleDto, ReadmeDto,
    SolutionDto, SolutionModuleDto,
};
use super::error::Problem;
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "solution-catalog",
        version = "v1",
        description = "Module catalog and solution environment lifecycle API"
    ),
    paths(
        handlers::list_modules,
        handlers::get_module,
        handlers::get_module_readme,
        handlers::list_solutions,
        handlers::get_solution,
        handlers::list_environments,
        handlers::add_environment,
        handlers::install_module
    ),
    components(schemas(
        ModuleDto,
        ModuleComponentDto,
        ModuleDependencyDto,
        ModuleAttributesDto,
        ReadmeDto,
        SolutionDto,
        SolutionModuleDto,
        EnvironmentDto,
        EnvironmentModuleDto,
        AddEnvironmentRequest,
        InstallModuleRequest,
        Problem
    )),
    tags(
        (name = "modules", description = "Module catalog"),
        (name = "solutions", description = "Solutions and their environments")
    )
)]
pub struct SolutionCatalogApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = SolutionCatalogApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert_eq!(paths.len(), 7);
        assert!(doc.paths.paths.contains_key("/solution-catalog/v1/modules/{module_id}/readme"));
        assert!(doc.paths.paths.contains_key(
            "/solution-catalog/v1/solutions/{solution_id}/environments/{environment_id}/modules"
        ));
    }
}
