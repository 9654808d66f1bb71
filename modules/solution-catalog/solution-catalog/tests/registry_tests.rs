#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for solution and environment lifecycle operations

mod common;

use std::sync::Arc;
use std::thread;

use common::{acme_solution, create_registry, create_registry_with};
use solution_catalog::domain::error::DomainError;
use solution_catalog::{EnvironmentModule, EnvironmentStatus, NewEnvironment, SolutionModule};

// =============================================================================
// Add Environment
// =============================================================================

#[test]
fn test_add_environment_unknown_solution_changes_nothing() {
    let registry = create_registry();
    let before = registry.list();

    let result = registry.add_environment("customer-z", &NewEnvironment::new("QA", "ns"));

    assert!(matches!(result, Err(DomainError::SolutionNotFound(_))));
    assert_eq!(registry.list(), before);
}

#[test]
fn test_add_environment_clones_manifest_stopped() {
    let registry = create_registry_with(vec![acme_solution()]);
    let before = registry.get("acme").unwrap();

    let envs = registry
        .add_environment("acme", &NewEnvironment::new("QA", "ns"))
        .unwrap();

    let qa = envs.last().unwrap();
    assert_eq!(qa.id, "acme-qa");
    assert_eq!(qa.status, EnvironmentStatus::Stopped);
    assert_eq!(
        qa.modules,
        vec![
            EnvironmentModule::new("A", "1", EnvironmentStatus::Stopped),
            EnvironmentModule::new("B", "2", EnvironmentStatus::Stopped),
        ]
    );

    let after = registry.get("acme").unwrap();
    assert!(after.updated_at > before.updated_at);
    assert_eq!(after.environments.len(), before.environments.len() + 1);
}

#[test]
fn test_colliding_environment_names_get_distinct_ids() {
    let registry = create_registry_with(vec![acme_solution()]);

    registry
        .add_environment("acme", &NewEnvironment::new("QA", "acme-qa"))
        .unwrap();
    let envs = registry
        .add_environment("acme", &NewEnvironment::new("qa", "acme-qa-2"))
        .unwrap();

    let ids: Vec<&str> = envs.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["dev-1", "dev-2", "prod", "acme-qa", "acme-qa-2"]);
}

#[test]
fn test_blank_environment_name_rejected() {
    let registry = create_registry_with(vec![acme_solution()]);
    let before = registry.get("acme").unwrap();

    let result = registry.add_environment("acme", &NewEnvironment::new(" ", "ns"));

    assert!(matches!(result, Err(DomainError::Validation(_))));
    assert_eq!(registry.get("acme").unwrap(), before);
}

// =============================================================================
// Install Module
// =============================================================================

#[test]
fn test_install_into_production_rejected() {
    let registry = create_registry_with(vec![acme_solution()]);
    let before = registry.get("acme").unwrap();

    let result = registry.install_module("acme", "prod", "X", "1.0");

    assert!(matches!(
        result,
        Err(DomainError::NotDevelopmentEnvironment { .. })
    ));
    assert_eq!(registry.get("acme").unwrap(), before);
}

#[test]
fn test_install_once_then_conflict() {
    let registry = create_registry_with(vec![acme_solution()]);

    let env = registry.install_module("acme", "dev-1", "X", "1.0").unwrap();
    assert_eq!(env.modules.len(), 3);
    assert_eq!(
        env.modules[2],
        EnvironmentModule::new("X", "1.0", EnvironmentStatus::Stopped)
    );

    let result = registry.install_module("acme", "dev-1", "X", "1.0");
    assert!(matches!(
        result,
        Err(DomainError::ModuleAlreadyInstalled { .. })
    ));

    let stored = registry.get("acme").unwrap();
    assert_eq!(stored.environment("dev-1").unwrap().modules.len(), 3);
}

#[test]
fn test_dev_namespace_alone_qualifies() {
    let registry = create_registry_with(vec![acme_solution()]);

    let env = registry.install_module("acme", "dev-2", "X", "1.0").unwrap();
    assert_eq!(env.name, "Sandbox");
    assert!(env.has_module("X"));
}

#[test]
fn test_manifest_gains_new_module_exactly_once() {
    let registry = create_registry_with(vec![acme_solution()]);

    registry.install_module("acme", "dev-1", "X", "1.0").unwrap();
    registry.install_module("acme", "dev-2", "X", "1.1").unwrap();

    let solution = registry.get("acme").unwrap();
    let entries: Vec<&SolutionModule> = solution
        .modules
        .iter()
        .filter(|m| m.module_id == "X")
        .collect();
    assert_eq!(entries, vec![&SolutionModule::new("X", "1.0")]);
}

#[test]
fn test_install_refreshes_timestamps() {
    let registry = create_registry_with(vec![acme_solution()]);
    let before = registry.get("acme").unwrap();

    registry.install_module("acme", "dev-1", "X", "1.0").unwrap();

    let after = registry.get("acme").unwrap();
    assert!(after.updated_at > before.updated_at);
    assert!(
        after.environment("dev-1").unwrap().last_deployed
            > before.environment("dev-1").unwrap().last_deployed
    );
    assert_eq!(after.environment("prod"), before.environment("prod"));
}

#[test]
fn test_install_unknown_targets_not_found() {
    let registry = create_registry();

    assert!(matches!(
        registry.install_module("customer-z", "dev", "X", "1.0"),
        Err(DomainError::SolutionNotFound(_))
    ));
    assert!(matches!(
        registry.install_module("customer-a-core", "qa", "X", "1.0"),
        Err(DomainError::EnvironmentNotFound { .. })
    ));
}

#[test]
fn test_seeded_staging_is_not_development() {
    let registry = create_registry();
    let result = registry.install_module("customer-a-core", "staging", "X", "1.0");
    assert!(matches!(
        result,
        Err(DomainError::NotDevelopmentEnvironment { .. })
    ));
}

// =============================================================================
// Concurrency and isolation
// =============================================================================

#[test]
fn test_concurrent_duplicate_installs_single_winner() {
    let registry = create_registry_with(vec![acme_solution()]);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.install_module("acme", "dev-1", "X", "1.0"))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let successes = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(DomainError::ModuleAlreadyInstalled { .. })))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 15);

    let env = registry.get("acme").unwrap();
    let count = env
        .environment("dev-1")
        .unwrap()
        .modules
        .iter()
        .filter(|m| m.module_id == "X")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_concurrent_adds_keep_every_environment() {
    let registry = create_registry_with(vec![acme_solution()]);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry
                    .add_environment("acme", &NewEnvironment::new(format!("qa-{i}"), "ns"))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.environments("acme").unwrap().len(), 11);
}

#[test]
fn test_returned_solutions_are_snapshots() {
    let registry = create_registry_with(vec![acme_solution()]);
    let snapshot = registry.get("acme").unwrap();

    registry
        .add_environment("acme", &NewEnvironment::new("QA", "ns"))
        .unwrap();

    assert_eq!(snapshot.environments.len(), 3);
    assert_eq!(registry.get("acme").unwrap().environments.len(), 4);
}
