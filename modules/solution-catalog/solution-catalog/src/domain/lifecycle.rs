//! Mutation rules for solutions and their environments.
//!
//! Functions here operate on a solution already locked by the repository and
//! either apply the whole change or return an error before touching it.

use chrono::{DateTime, TimeDelta, Utc};
use solution_catalog_sdk::{
    Environment, EnvironmentModule, EnvironmentStatus, NewEnvironment, Solution, SolutionModule,
};

use super::error::DomainError;

/// Returns the next value of a monotonic timestamp.
///
/// `now` is used when it is ahead of `previous`; otherwise the timestamp is
/// bumped by one microsecond so it still strictly increases.
#[must_use]
pub fn advance_timestamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + TimeDelta::microseconds(1)
    }
}

/// Derives the identifier of a new environment from its solution and name.
///
/// The base form is `"{solution_id}-{lowercased name}"`. When that is already
/// used inside the solution, `-2`, `-3`, ... is appended until it is free.
#[must_use]
pub fn derive_environment_id(solution: &Solution, name: &str) -> String {
    let base = format!("{}-{}", solution.id, name.to_lowercase());
    if solution.environment(&base).is_none() {
        return base;
    }

    let mut suffix: u32 = 2;
    loop {
        let candidate = format!("{base}-{suffix}");
        if solution.environment(&candidate).is_none() {
            return candidate;
        }
        suffix += 1;
    }
}

/// Appends a new stopped environment to `solution`.
///
/// The environment's modules mirror the solution manifest, all stopped,
/// regardless of the state of sibling environments.
///
/// # Errors
///
/// Returns `Validation` if the environment name is blank.
pub fn add_environment(
    solution: &mut Solution,
    request: &NewEnvironment,
    now: DateTime<Utc>,
) -> Result<(), DomainError> {
    if request.name.trim().is_empty() {
        return Err(DomainError::validation("environment name must not be empty"));
    }

    let environment = Environment {
        id: derive_environment_id(solution, &request.name),
        name: request.name.clone(),
        namespace: request.namespace.clone(),
        status: EnvironmentStatus::Stopped,
        last_deployed: now,
        modules: solution
            .modules
            .iter()
            .map(|m| EnvironmentModule::new(&m.module_id, &m.version, EnvironmentStatus::Stopped))
            .collect(),
    };

    solution.environments.push(environment);
    solution.updated_at = advance_timestamp(solution.updated_at, now);
    Ok(())
}

/// Installs `module_id@version` into a development environment of `solution`.
///
/// The new entry starts stopped. A module missing from the solution manifest
/// is added there as well.
///
/// # Errors
///
/// - `EnvironmentNotFound` if the environment doesn't exist
/// - `Validation` if the module id or version is blank
/// - `NotDevelopmentEnvironment` if the environment isn't a development one
/// - `ModuleAlreadyInstalled` if the environment already has the module
pub fn install_module(
    solution: &mut Solution,
    environment_id: &str,
    module_id: &str,
    version: &str,
    now: DateTime<Utc>,
) -> Result<(), DomainError> {
    let solution_id = solution.id.clone();
    let environment = solution
        .environments
        .iter_mut()
        .find(|e| e.id == environment_id)
        .ok_or_else(|| DomainError::environment_not_found(&solution_id, environment_id))?;

    if module_id.trim().is_empty() {
        return Err(DomainError::validation("module id must not be empty"));
    }
    if version.trim().is_empty() {
        return Err(DomainError::validation("module version must not be empty"));
    }
    if !environment.is_development() {
        return Err(DomainError::not_development(environment_id));
    }
    if environment.has_module(module_id) {
        return Err(DomainError::already_installed(environment_id, module_id));
    }

    environment
        .modules
        .push(EnvironmentModule::new(module_id, version, EnvironmentStatus::Stopped));
    environment.last_deployed = now;

    if !solution.has_module(module_id) {
        solution.modules.push(SolutionModule::new(module_id, version));
    }
    solution.updated_at = advance_timestamp(solution.updated_at, now);
    Ok(())
}
