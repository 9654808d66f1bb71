//! Domain services for the Solution Catalog module.

use std::sync::Arc;

use chrono::Utc;
use solution_catalog_sdk::{Environment, Module, NewEnvironment, Solution};
use tracing::{debug, info, warn};

use super::error::DomainError;
use super::lifecycle;
use super::ports::ReadmeProvider;
use super::repo::{ModuleRepository, SolutionRepository};

/// Read-only view over the module catalog.
///
/// Lookups are served from the repository. READMEs are fetched on demand
/// through the [`ReadmeProvider`] port and never fail the caller.
pub struct ModuleCatalogService {
    repo: Arc<dyn ModuleRepository>,
    readme: Arc<dyn ReadmeProvider>,
}

impl ModuleCatalogService {
    /// Creates a new `ModuleCatalogService`.
    #[must_use]
    pub fn new(repo: Arc<dyn ModuleRepository>, readme: Arc<dyn ReadmeProvider>) -> Self {
        Self { repo, readme }
    }

    /// Lists every module in catalog order.
    #[must_use]
    pub fn list(&self) -> Vec<Module> {
        self.repo.list()
    }

    /// Retrieves a single module by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `ModuleNotFound` if no module has the identifier.
    pub fn get(&self, module_id: &str) -> Result<Module, DomainError> {
        debug!(module_id, "Looking up module");
        self.repo
            .get(module_id)
            .ok_or_else(|| DomainError::module_not_found(module_id))
    }

    /// Filters the catalog by a case-insensitive substring.
    ///
    /// A module matches when the query occurs in its name, description or any
    /// of its tags. Only the empty query returns the whole catalog; whitespace
    /// is matched like any other character. Catalog order is preserved.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Module> {
        let modules = self.repo.list();
        if query.is_empty() {
            return modules;
        }

        let needle = query.to_lowercase();
        let matches: Vec<Module> = modules
            .into_iter()
            .filter(|m| module_matches(m, &needle))
            .collect();
        debug!(query = %needle, matches = matches.len(), "Searched modules");
        matches
    }

    /// Returns the rendered README of a module, or an empty string.
    ///
    /// Missing modules, modules without a source repository and provider
    /// failures all produce an empty string.
    pub async fn readme(&self, module_id: &str) -> String {
        let Some(module) = self.repo.get(module_id) else {
            debug!(module_id, "README requested for unknown module");
            return String::new();
        };
        let Some(repository) = module.source_repository() else {
            return String::new();
        };

        match self.readme.fetch_readme(repository).await {
            Ok(html) => html,
            Err(e) => {
                warn!(module_id, repository, error = %e, "README unavailable");
                String::new()
            }
        }
    }
}

fn module_matches(module: &Module, needle: &str) -> bool {
    module.name.to_lowercase().contains(needle)
        || module.description.to_lowercase().contains(needle)
        || module.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

/// Lifecycle operations over solutions and their environments.
///
/// Every mutation is applied through [`SolutionRepository::update`], so it
/// either completes as a whole or leaves the solution unchanged.
pub struct SolutionRegistryService {
    repo: Arc<dyn SolutionRepository>,
}

impl SolutionRegistryService {
    /// Creates a new `SolutionRegistryService` with the given repository.
    #[must_use]
    pub fn new(repo: Arc<dyn SolutionRepository>) -> Self {
        Self { repo }
    }

    /// Lists every solution in registry order.
    #[must_use]
    pub fn list(&self) -> Vec<Solution> {
        self.repo.list()
    }

    /// Retrieves a single solution by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `SolutionNotFound` if no solution has the identifier.
    pub fn get(&self, solution_id: &str) -> Result<Solution, DomainError> {
        debug!(solution_id, "Looking up solution");
        self.repo
            .get(solution_id)
            .ok_or_else(|| DomainError::solution_not_found(solution_id))
    }

    /// Lists the environments of a solution.
    ///
    /// # Errors
    ///
    /// Returns `SolutionNotFound` if no solution has the identifier.
    pub fn environments(&self, solution_id: &str) -> Result<Vec<Environment>, DomainError> {
        self.get(solution_id).map(|s| s.environments)
    }

    /// Adds a stopped environment to a solution and returns the solution's
    /// environments afterwards.
    ///
    /// # Errors
    ///
    /// - `SolutionNotFound` if no solution has the identifier
    /// - `Validation` if the environment name is blank
    pub fn add_environment(
        &self,
        solution_id: &str,
        request: &NewEnvironment,
    ) -> Result<Vec<Environment>, DomainError> {
        let solution = self.repo.update(solution_id, &mut |solution: &mut Solution| {
            lifecycle::add_environment(solution, request, Utc::now())
        })?;

        if let Some(added) = solution.environments.last() {
            info!(
                solution_id,
                environment_id = %added.id,
                namespace = %added.namespace,
                "Added environment"
            );
        }
        Ok(solution.environments)
    }

    /// Installs a module into a development environment and returns the
    /// environment afterwards.
    ///
    /// # Errors
    ///
    /// - `SolutionNotFound` / `EnvironmentNotFound` for unknown identifiers
    /// - `NotDevelopmentEnvironment` if the environment isn't a development one
    /// - `ModuleAlreadyInstalled` if the environment already has the module
    /// - `Validation` if the module id or version is blank
    pub fn install_module(
        &self,
        solution_id: &str,
        environment_id: &str,
        module_id: &str,
        version: &str,
    ) -> Result<Environment, DomainError> {
        let solution = self.repo.update(solution_id, &mut |solution: &mut Solution| {
            lifecycle::install_module(solution, environment_id, module_id, version, Utc::now())
        })?;

        let environment = solution
            .environments
            .into_iter()
            .find(|e| e.id == environment_id)
            .ok_or_else(|| {
                DomainError::Internal(anyhow::anyhow!(
                    "environment {environment_id} vanished after install"
                ))
            })?;

        info!(
            solution_id,
            environment_id, module_id, version, "Installed module"
        );
        Ok(environment)
    }
}
