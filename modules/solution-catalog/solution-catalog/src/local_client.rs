//! Local client implementing the SDK traits.

use std::sync::Arc;

use async_trait::async_trait;
use solution_catalog_sdk::{
    Environment, Module, ModuleCatalogApi, NewEnvironment, Solution, SolutionCatalogError,
    SolutionRegistryApi,
};

use crate::domain::service::{ModuleCatalogService, SolutionRegistryService};

/// Local client for the Solution Catalog module.
///
/// Implements `ModuleCatalogApi` and `SolutionRegistryApi` for in-process
/// consumers by delegating to the domain services.
pub struct SolutionCatalogLocalClient {
    catalog: Arc<ModuleCatalogService>,
    registry: Arc<SolutionRegistryService>,
}

impl SolutionCatalogLocalClient {
    /// Creates a new local client over the given services.
    #[must_use]
    pub fn new(catalog: Arc<ModuleCatalogService>, registry: Arc<SolutionRegistryService>) -> Self {
        Self { catalog, registry }
    }
}

#[async_trait]
impl ModuleCatalogApi for SolutionCatalogLocalClient {
    async fn list_modules(&self) -> Result<Vec<Module>, SolutionCatalogError> {
        Ok(self.catalog.list())
    }

    async fn get_module(&self, module_id: &str) -> Result<Module, SolutionCatalogError> {
        self.catalog.get(module_id).map_err(SolutionCatalogError::from)
    }

    async fn search_modules(&self, query: &str) -> Result<Vec<Module>, SolutionCatalogError> {
        Ok(self.catalog.search(query))
    }

    async fn get_module_readme(&self, module_id: &str) -> Result<String, SolutionCatalogError> {
        Ok(self.catalog.readme(module_id).await)
    }
}

#[async_trait]
impl SolutionRegistryApi for SolutionCatalogLocalClient {
    async fn list_solutions(&self) -> Result<Vec<Solution>, SolutionCatalogError> {
        Ok(self.registry.list())
    }

    async fn get_solution(&self, solution_id: &str) -> Result<Solution, SolutionCatalogError> {
        self.registry
            .get(solution_id)
            .map_err(SolutionCatalogError::from)
    }

    async fn list_environments(
        &self,
        solution_id: &str,
    ) -> Result<Vec<Environment>, SolutionCatalogError> {
        self.registry
            .environments(solution_id)
            .map_err(SolutionCatalogError::from)
    }

    async fn add_environment(
        &self,
        solution_id: &str,
        request: NewEnvironment,
    ) -> Result<Vec<Environment>, SolutionCatalogError> {
        self.registry
            .add_environment(solution_id, &request)
            .map_err(SolutionCatalogError::from)
    }

    async fn install_module(
        &self,
        solution_id: &str,
        environment_id: &str,
        module_id: &str,
        version: &str,
    ) -> Result<Environment, SolutionCatalogError> {
        self.registry
            .install_module(solution_id, environment_id, module_id, version)
            .map_err(SolutionCatalogError::from)
    }
}
