#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for solution-catalog integration tests

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use solution_catalog::domain::service::{ModuleCatalogService, SolutionRegistryService};
use solution_catalog::infra::storage::seed::{seed_modules, seed_solutions};
use solution_catalog::infra::{
    InMemoryModuleRepository, InMemorySolutionRepository, NoopReadmeProvider,
};
use solution_catalog::{
    Environment, EnvironmentModule, EnvironmentStatus, SolutionModule, Solution,
    SolutionCatalogModule,
};

pub fn create_catalog() -> Arc<ModuleCatalogService> {
    let repo = InMemoryModuleRepository::new(seed_modules(Utc::now())).unwrap();
    Arc::new(ModuleCatalogService::new(
        Arc::new(repo),
        Arc::new(NoopReadmeProvider),
    ))
}

pub fn create_registry() -> Arc<SolutionRegistryService> {
    create_registry_with(seed_solutions(Utc::now()))
}

pub fn create_registry_with(solutions: Vec<Solution>) -> Arc<SolutionRegistryService> {
    let repo = InMemorySolutionRepository::new(solutions).unwrap();
    Arc::new(SolutionRegistryService::new(Arc::new(repo)))
}

pub fn create_module() -> SolutionCatalogModule {
    let now = Utc::now();
    SolutionCatalogModule::from_parts(
        seed_modules(now),
        seed_solutions(now),
        Arc::new(NoopReadmeProvider),
    )
    .unwrap()
}

pub fn environment(id: &str, name: &str, namespace: &str, modules: &[(&str, &str)]) -> Environment {
    Environment {
        id: id.to_owned(),
        name: name.to_owned(),
        namespace: namespace.to_owned(),
        status: EnvironmentStatus::Running,
        last_deployed: Utc::now() - TimeDelta::hours(1),
        modules: modules
            .iter()
            .map(|(m, v)| EnvironmentModule::new(*m, *v, EnvironmentStatus::Running))
            .collect(),
    }
}

/// A solution with manifest `[A@1, B@2]` and `dev-1`, `dev-2`, `prod` environments.
///
/// `updated_at` lies in the future so refreshes have to bump past it.
pub fn acme_solution() -> Solution {
    let deployed = [("A", "1"), ("B", "2")];
    Solution {
        id: "acme".to_owned(),
        name: "Acme".to_owned(),
        description: "Fixture".to_owned(),
        organization: "Acme Inc".to_owned(),
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        updated_at: Utc::now() + TimeDelta::hours(1),
        modules: vec![SolutionModule::new("A", "1"), SolutionModule::new("B", "2")],
        environments: vec![
            environment("dev-1", "dev-1", "acme-one", &deployed),
            environment("dev-2", "Sandbox", "acme-dev-2", &deployed),
            environment("prod", "Production", "acme-prod", &deployed),
        ],
    }
}
