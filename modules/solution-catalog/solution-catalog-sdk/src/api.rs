//! `ModuleCatalogApi` and `SolutionRegistryApi` trait definitions.
//!
//! These traits define the public API for the `solution-catalog` module.

use async_trait::async_trait;

use crate::error::SolutionCatalogError;
use crate::models::{Environment, Module, NewEnvironment, Solution};

/// Read-only access to the module catalog.
///
/// ```ignore
/// let catalog: Arc<dyn ModuleCatalogApi> = module.catalog_api();
/// let redis = catalog.search_modules("redis").await?;
/// ```
#[async_trait]
pub trait ModuleCatalogApi: Send + Sync {
    /// Lists all modules in declaration order.
    ///
    /// # Errors
    ///
    /// * `Internal` - If the catalog cannot be read
    async fn list_modules(&self) -> Result<Vec<Module>, SolutionCatalogError>;

    /// Retrieves a single module by its identifier.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If no module with the given identifier exists
    async fn get_module(&self, module_id: &str) -> Result<Module, SolutionCatalogError>;

    /// Searches modules by name, description, and tags (case-insensitive
    /// substring match). An empty query returns every module.
    ///
    /// # Errors
    ///
    /// * `Internal` - If the catalog cannot be read
    async fn search_modules(&self, query: &str) -> Result<Vec<Module>, SolutionCatalogError>;

    /// Returns the rendered README of a module, or an empty string when none
    /// is available. Never fails because the README source is unreachable.
    ///
    /// # Errors
    ///
    /// * `Internal` - If the catalog cannot be read
    async fn get_module_readme(&self, module_id: &str) -> Result<String, SolutionCatalogError>;
}

/// Access to customer solutions and their environments.
#[async_trait]
pub trait SolutionRegistryApi: Send + Sync {
    /// Lists all solutions in declaration order.
    ///
    /// # Errors
    ///
    /// * `Internal` - If the registry cannot be read
    async fn list_solutions(&self) -> Result<Vec<Solution>, SolutionCatalogError>;

    /// Retrieves a single solution by its identifier.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If no solution with the given identifier exists
    async fn get_solution(&self, solution_id: &str) -> Result<Solution, SolutionCatalogError>;

    /// Lists the environments of a solution.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If the solution does not exist
    async fn list_environments(
        &self,
        solution_id: &str,
    ) -> Result<Vec<Environment>, SolutionCatalogError>;

    /// Adds a new, stopped environment to a solution and returns the
    /// solution's updated environment list.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If the solution does not exist
    /// * `Validation` - If the environment name is blank
    async fn add_environment(
        &self,
        solution_id: &str,
        request: NewEnvironment,
    ) -> Result<Vec<Environment>, SolutionCatalogError>;

    /// Installs a module into a development environment and returns the
    /// updated environment.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If the solution or environment does not exist
    /// * `InvalidOperation` - If the environment is not a development environment
    /// * `Conflict` - If the module is already installed in the environment
    async fn install_module(
        &self,
        solution_id: &str,
        environment_id: &str,
        module_id: &str,
        version: &str,
    ) -> Result<Environment, SolutionCatalogError>;
}
