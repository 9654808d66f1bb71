//! Module declaration for the Solution Catalog module.

use std::sync::Arc;

use chrono::Utc;
use solution_catalog_sdk::{Module, ModuleCatalogApi, Solution, SolutionRegistryApi};
use tracing::{debug, info};

use crate::config::SolutionCatalogConfig;
use crate::domain::ports::ReadmeProvider;
use crate::domain::service::{ModuleCatalogService, SolutionRegistryService};
use crate::infra::storage::seed::{seed_modules, seed_solutions};
use crate::infra::{
    GithubReadmeProvider, InMemoryModuleRepository, InMemorySolutionRepository,
    NoopReadmeProvider,
};
use crate::local_client::SolutionCatalogLocalClient;

/// Solution Catalog module.
///
/// Owns the module catalog and the solution registry, built once at startup
/// and shared with REST handlers and in-process clients.
pub struct SolutionCatalogModule {
    catalog: Arc<ModuleCatalogService>,
    registry: Arc<SolutionRegistryService>,
    client: Arc<SolutionCatalogLocalClient>,
}

impl SolutionCatalogModule {
    /// Builds the module with the default seed data.
    ///
    /// # Errors
    ///
    /// Fails if the README client cannot be created or the seed data is
    /// inconsistent.
    pub fn new(cfg: &SolutionCatalogConfig) -> anyhow::Result<Self> {
        info!("Initializing solution_catalog module");
        debug!(
            readme_enabled = cfg.readme.enabled,
            api_base_url = %cfg.readme.api_base_url,
            timeout_secs = cfg.readme.timeout_secs,
            "Loaded solution_catalog config"
        );

        let readme: Arc<dyn ReadmeProvider> = if cfg.readme.enabled {
            Arc::new(GithubReadmeProvider::new(&cfg.readme)?)
        } else {
            Arc::new(NoopReadmeProvider)
        };

        let now = Utc::now();
        let module = Self::from_parts(seed_modules(now), seed_solutions(now), readme)?;

        info!("Solution catalog module initialized");
        Ok(module)
    }

    /// Builds the module from explicit contents and README provider.
    ///
    /// # Errors
    ///
    /// Returns `Validation` errors for duplicate module, component, solution
    /// or environment identifiers.
    pub fn from_parts(
        modules: Vec<Module>,
        solutions: Vec<Solution>,
        readme: Arc<dyn ReadmeProvider>,
    ) -> anyhow::Result<Self> {
        let module_count = modules.len();
        let solution_count = solutions.len();

        let catalog = Arc::new(ModuleCatalogService::new(
            Arc::new(InMemoryModuleRepository::new(modules)?),
            readme,
        ));
        let registry = Arc::new(SolutionRegistryService::new(Arc::new(
            InMemorySolutionRepository::new(solutions)?,
        )));
        let client = Arc::new(SolutionCatalogLocalClient::new(
            Arc::clone(&catalog),
            Arc::clone(&registry),
        ));

        debug!(
            modules = module_count,
            solutions = solution_count,
            "Loaded catalog contents"
        );
        Ok(Self {
            catalog,
            registry,
            client,
        })
    }

    /// Mounts the REST routes onto `router`.
    #[must_use]
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering solution_catalog REST routes");
        crate::api::rest::routes::register_routes(
            router,
            Arc::clone(&self.catalog),
            Arc::clone(&self.registry),
        )
    }

    /// In-process client for the module catalog.
    #[must_use]
    pub fn catalog_api(&self) -> Arc<dyn ModuleCatalogApi> {
        self.client.clone()
    }

    /// In-process client for the solution registry.
    #[must_use]
    pub fn registry_api(&self) -> Arc<dyn SolutionRegistryApi> {
        self.client.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReadmeConfig;

    fn disabled_readme() -> SolutionCatalogConfig {
        SolutionCatalogConfig {
            readme: ReadmeConfig {
                enabled: false,
                ..ReadmeConfig::default()
            },
        }
    }

    #[tokio::test]
    async fn test_module_exposes_seeded_apis() {
        let module = SolutionCatalogModule::new(&disabled_readme()).unwrap();

        let modules = module.catalog_api().list_modules().await.unwrap();
        assert_eq!(modules.len(), 2);

        let solutions = module.registry_api().list_solutions().await.unwrap();
        let ids: Vec<&str> = solutions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["customer-a-core", "customer-b-analytics"]);
    }

    #[test]
    fn test_from_parts_rejects_duplicate_solutions() {
        let now = Utc::now();
        let mut solutions = seed_solutions(now);
        solutions.push(solutions[0].clone());

        let result =
            SolutionCatalogModule::from_parts(seed_modules(now), solutions, Arc::new(NoopReadmeProvider));
        assert!(result.is_err());
    }
}
