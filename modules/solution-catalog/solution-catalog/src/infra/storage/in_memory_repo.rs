//! In-memory repositories for modules and solutions.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use solution_catalog_sdk::{Module, Solution};

use crate::domain::error::DomainError;
use crate::domain::repo::{ModuleRepository, SolutionMutation, SolutionRepository};

/// Immutable module catalog indexed by identifier.
///
/// The catalog never changes after construction, so it is shared without a
/// lock.
pub struct InMemoryModuleRepository {
    modules: Vec<Module>,
    index: HashMap<String, usize>,
}

impl InMemoryModuleRepository {
    /// Builds the catalog from `modules`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `Validation` on a duplicate module identifier or on a duplicate
    /// component identifier within one module.
    pub fn new(modules: Vec<Module>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(modules.len());
        for (pos, module) in modules.iter().enumerate() {
            if index.insert(module.id.clone(), pos).is_some() {
                return Err(DomainError::validation(format!(
                    "duplicate module id: {}",
                    module.id
                )));
            }

            let mut components = HashSet::new();
            for component in &module.components {
                if !components.insert(component.id.as_str()) {
                    return Err(DomainError::validation(format!(
                        "duplicate component id {} in module {}",
                        component.id, module.id
                    )));
                }
            }
        }

        Ok(Self { modules, index })
    }
}

impl ModuleRepository for InMemoryModuleRepository {
    fn list(&self) -> Vec<Module> {
        self.modules.clone()
    }

    fn get(&self, module_id: &str) -> Option<Module> {
        self.index
            .get(module_id)
            .and_then(|&pos| self.modules.get(pos))
            .cloned()
    }
}

/// Solution registry guarded by a single `RwLock`.
///
/// Solutions are never added or removed after construction, so the
/// identifier index lives outside the lock. Mutations run on a copy that
/// replaces the stored solution only when the whole mutation succeeds.
pub struct InMemorySolutionRepository {
    solutions: RwLock<Vec<Solution>>,
    index: HashMap<String, usize>,
}

impl InMemorySolutionRepository {
    /// Builds the registry from `solutions`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `Validation` on a duplicate solution identifier or on a
    /// duplicate environment identifier within one solution.
    pub fn new(solutions: Vec<Solution>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(solutions.len());
        for (pos, solution) in solutions.iter().enumerate() {
            if index.insert(solution.id.clone(), pos).is_some() {
                return Err(DomainError::validation(format!(
                    "duplicate solution id: {}",
                    solution.id
                )));
            }

            let mut environments = HashSet::new();
            for environment in &solution.environments {
                if !environments.insert(environment.id.as_str()) {
                    return Err(DomainError::validation(format!(
                        "duplicate environment id {} in solution {}",
                        environment.id, solution.id
                    )));
                }
            }
        }

        Ok(Self {
            solutions: RwLock::new(solutions),
            index,
        })
    }
}

impl SolutionRepository for InMemorySolutionRepository {
    fn list(&self) -> Vec<Solution> {
        self.solutions.read().clone()
    }

    fn get(&self, solution_id: &str) -> Option<Solution> {
        let pos = *self.index.get(solution_id)?;
        self.solutions.read().get(pos).cloned()
    }

    fn update(
        &self,
        solution_id: &str,
        mutation: SolutionMutation<'_>,
    ) -> Result<Solution, DomainError> {
        let pos = *self
            .index
            .get(solution_id)
            .ok_or_else(|| DomainError::solution_not_found(solution_id))?;

        let mut solutions = self.solutions.write();
        let stored = solutions
            .get_mut(pos)
            .ok_or_else(|| DomainError::solution_not_found(solution_id))?;

        let mut draft = stored.clone();
        mutation(&mut draft)?;
        stored.clone_from(&draft);
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use solution_catalog_sdk::{
        ComponentType, Environment, EnvironmentStatus, ModuleAttributes, ModuleComponent,
    };
    use std::sync::Arc;
    use std::thread;

    fn module(id: &str, component_ids: &[&str]) -> Module {
        Module {
            id: id.to_owned(),
            name: id.to_uppercase(),
            description: String::new(),
            maintainer: "Acme".to_owned(),
            tags: vec![],
            version: "1.0.0".to_owned(),
            last_updated: DateTime::<Utc>::UNIX_EPOCH,
            install_command: String::new(),
            dependencies: vec![],
            attributes: ModuleAttributes::default(),
            components: component_ids
                .iter()
                .map(|c| ModuleComponent {
                    id: (*c).to_owned(),
                    name: (*c).to_owned(),
                    component_type: ComponentType::Backend,
                    description: String::new(),
                    version: None,
                })
                .collect(),
        }
    }

    fn environment(id: &str) -> Environment {
        Environment {
            id: id.to_owned(),
            name: id.to_owned(),
            namespace: id.to_owned(),
            status: EnvironmentStatus::Running,
            last_deployed: DateTime::<Utc>::UNIX_EPOCH,
            modules: vec![],
        }
    }

    fn solution(id: &str, env_ids: &[&str]) -> Solution {
        Solution {
            id: id.to_owned(),
            name: id.to_owned(),
            description: String::new(),
            organization: "Acme".to_owned(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
            modules: vec![],
            environments: env_ids.iter().map(|e| environment(e)).collect(),
        }
    }

    #[test]
    fn test_module_catalog_lookup() {
        let repo =
            InMemoryModuleRepository::new(vec![module("b", &["api"]), module("a", &[])]).unwrap();

        let ids: Vec<String> = repo.list().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(repo.get("a").unwrap().name, "A");
        assert!(repo.get("c").is_none());
    }

    #[test]
    fn test_module_catalog_rejects_duplicates() {
        let result = InMemoryModuleRepository::new(vec![module("a", &[]), module("a", &[])]);
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let result = InMemoryModuleRepository::new(vec![module("a", &["api", "api"])]);
        assert!(matches!(result, Err(DomainError::Validation(_))));

        // Component ids only need to be unique within their module.
        assert!(
            InMemoryModuleRepository::new(vec![module("a", &["api"]), module("b", &["api"])])
                .is_ok()
        );
    }

    #[test]
    fn test_solution_registry_rejects_duplicates() {
        let result = InMemorySolutionRepository::new(vec![solution("s", &[]), solution("s", &[])]);
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let result = InMemorySolutionRepository::new(vec![solution("s", &["dev", "dev"])]);
        assert!(matches!(result, Err(DomainError::Validation(_))));

        assert!(
            InMemorySolutionRepository::new(vec![solution("s", &["dev"]), solution("t", &["dev"])])
                .is_ok()
        );
    }

    #[test]
    fn test_get_returns_a_copy() {
        let repo = InMemorySolutionRepository::new(vec![solution("s", &["dev"])]).unwrap();

        let mut copy = repo.get("s").unwrap();
        copy.environments.clear();

        assert_eq!(repo.get("s").unwrap().environments.len(), 1);
    }

    #[test]
    fn test_update_applies_mutation() {
        let repo = InMemorySolutionRepository::new(vec![solution("s", &["dev"])]).unwrap();

        let updated = repo
            .update("s", &mut |s: &mut Solution| {
                s.environments.push(environment("qa"));
                Ok(())
            })
            .unwrap();

        assert_eq!(updated.environments.len(), 2);
        assert_eq!(repo.get("s").unwrap(), updated);
    }

    #[test]
    fn test_failed_update_leaves_solution_unchanged() {
        let repo = InMemorySolutionRepository::new(vec![solution("s", &["dev"])]).unwrap();
        let before = repo.get("s").unwrap();

        let result = repo.update("s", &mut |s: &mut Solution| {
            s.environments.clear();
            s.name = "changed".to_owned();
            Err(DomainError::validation("rejected"))
        });

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(repo.get("s").unwrap(), before);
    }

    #[test]
    fn test_update_unknown_solution() {
        let repo = InMemorySolutionRepository::new(vec![solution("s", &[])]).unwrap();
        let result = repo.update("t", &mut |_: &mut Solution| Ok(()));
        assert!(matches!(result, Err(DomainError::SolutionNotFound(_))));
    }

    #[test]
    fn test_concurrent_updates_are_serialized() {
        let repo = Arc::new(InMemorySolutionRepository::new(vec![solution("s", &[])]).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = Arc::clone(&repo);
                thread::spawn(move || {
                    for j in 0..25 {
                        repo.update("s", &mut |s: &mut Solution| {
                            s.environments.push(environment(&format!("env-{i}-{j}")));
                            Ok(())
                        })
                        .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(repo.get("s").unwrap().environments.len(), 200);
    }
}
