//! Domain error types for the Solution Catalog module.

use solution_catalog_sdk::SolutionCatalogError;
use thiserror::Error;

/// Domain-level errors for the Solution Catalog module.
#[derive(Error, Debug)]
pub enum DomainError {
    /// No module with the given identifier exists in the catalog.
    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    /// No solution with the given identifier exists.
    #[error("Solution not found: {0}")]
    SolutionNotFound(String),

    /// The solution exists but has no environment with the given identifier.
    #[error("Environment not found: {environment_id} in solution {solution_id}")]
    EnvironmentNotFound {
        solution_id: String,
        environment_id: String,
    },

    /// Modules may only be installed into development environments.
    #[error("Environment {environment_id} is not a development environment")]
    NotDevelopmentEnvironment { environment_id: String },

    /// The module is already present in the target environment.
    #[error("Module {module_id} is already installed in environment {environment_id}")]
    ModuleAlreadyInstalled {
        environment_id: String,
        module_id: String,
    },

    /// The input is malformed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn module_not_found(module_id: impl Into<String>) -> Self {
        Self::ModuleNotFound(module_id.into())
    }

    #[must_use]
    pub fn solution_not_found(solution_id: impl Into<String>) -> Self {
        Self::SolutionNotFound(solution_id.into())
    }

    #[must_use]
    pub fn environment_not_found(
        solution_id: impl Into<String>,
        environment_id: impl Into<String>,
    ) -> Self {
        Self::EnvironmentNotFound {
            solution_id: solution_id.into(),
            environment_id: environment_id.into(),
        }
    }

    #[must_use]
    pub fn not_development(environment_id: impl Into<String>) -> Self {
        Self::NotDevelopmentEnvironment {
            environment_id: environment_id.into(),
        }
    }

    #[must_use]
    pub fn already_installed(
        environment_id: impl Into<String>,
        module_id: impl Into<String>,
    ) -> Self {
        Self::ModuleAlreadyInstalled {
            environment_id: environment_id.into(),
            module_id: module_id.into(),
        }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns `true` for any of the not-found variants.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ModuleNotFound(_) | Self::SolutionNotFound(_) | Self::EnvironmentNotFound { .. }
        )
    }
}

impl From<DomainError> for SolutionCatalogError {
    fn from(e: DomainError) -> Self {
        let message = e.to_string();
        match e {
            DomainError::ModuleNotFound(_)
            | DomainError::SolutionNotFound(_)
            | DomainError::EnvironmentNotFound { .. } => Self::not_found(message),
            DomainError::NotDevelopmentEnvironment { .. } => Self::invalid_operation(message),
            DomainError::ModuleAlreadyInstalled { .. } => Self::conflict(message),
            DomainError::Validation(msg) => Self::validation(msg),
            DomainError::Internal(e) => Self::internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            DomainError::module_not_found("m"),
            DomainError::ModuleNotFound(_)
        ));
        assert!(matches!(
            DomainError::solution_not_found("s"),
            DomainError::SolutionNotFound(_)
        ));
        assert!(matches!(
            DomainError::environment_not_found("s", "e"),
            DomainError::EnvironmentNotFound { .. }
        ));
        assert!(matches!(
            DomainError::not_development("prod"),
            DomainError::NotDevelopmentEnvironment { .. }
        ));
        assert!(matches!(
            DomainError::already_installed("dev-1", "m"),
            DomainError::ModuleAlreadyInstalled { .. }
        ));
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::module_not_found("m").is_not_found());
        assert!(DomainError::solution_not_found("s").is_not_found());
        assert!(DomainError::environment_not_found("s", "e").is_not_found());
        assert!(!DomainError::not_development("prod").is_not_found());
        assert!(!DomainError::validation("blank").is_not_found());
    }

    #[test]
    fn test_domain_to_sdk_error_conversion() {
        let sdk_err: SolutionCatalogError = DomainError::solution_not_found("s").into();
        assert!(sdk_err.is_not_found());

        let sdk_err: SolutionCatalogError = DomainError::environment_not_found("s", "e").into();
        assert!(sdk_err.is_not_found());

        let sdk_err: SolutionCatalogError = DomainError::not_development("prod").into();
        assert!(sdk_err.is_invalid_operation());

        let sdk_err: SolutionCatalogError = DomainError::already_installed("dev-1", "m").into();
        assert!(sdk_err.is_conflict());

        let sdk_err: SolutionCatalogError = DomainError::validation("blank name").into();
        assert_eq!(sdk_err, SolutionCatalogError::Validation("blank name".to_owned()));

        let sdk_err: SolutionCatalogError = DomainError::Internal(anyhow::anyhow!("boom")).into();
        assert!(matches!(sdk_err, SolutionCatalogError::Internal(_)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::environment_not_found("customer-a-core", "qa").to_string(),
            "Environment not found: qa in solution customer-a-core"
        );
        assert_eq!(
            DomainError::already_installed("dev-1", "kafka").to_string(),
            "Module kafka is already installed in environment dev-1"
        );
        assert_eq!(
            DomainError::not_development("prod").to_string(),
            "Environment prod is not a development environment"
        );
    }
}
