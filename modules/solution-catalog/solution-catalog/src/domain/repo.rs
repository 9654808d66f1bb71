//! Repository traits for catalog and solution storage.

use solution_catalog_sdk::{Module, Solution};

use super::error::DomainError;

/// Read-only storage for catalog modules.
pub trait ModuleRepository: Send + Sync {
    /// Returns every module in declaration order.
    fn list(&self) -> Vec<Module>;

    /// Returns the module with the given identifier.
    fn get(&self, module_id: &str) -> Option<Module>;
}

/// Mutation applied to a single solution inside a repository transaction.
pub type SolutionMutation<'a> = &'a mut dyn FnMut(&mut Solution) -> Result<(), DomainError>;

/// Storage for solutions and their environments.
///
/// Implementations own every record and hand out copies, so callers can only
/// change state through [`SolutionRepository::update`].
pub trait SolutionRepository: Send + Sync {
    /// Returns every solution in declaration order.
    fn list(&self) -> Vec<Solution>;

    /// Returns the solution with the given identifier.
    fn get(&self, solution_id: &str) -> Option<Solution>;

    /// Applies `mutation` to the solution atomically and returns its new state.
    ///
    /// Concurrent updates are serialized. Readers observe either the state
    /// before the mutation or after it. If `mutation` fails the stored
    /// solution is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `SolutionNotFound` if the solution doesn't exist, or the error
    /// produced by `mutation`.
    fn update(
        &self,
        solution_id: &str,
        mutation: SolutionMutation<'_>,
    ) -> Result<Solution, DomainError>;
}
