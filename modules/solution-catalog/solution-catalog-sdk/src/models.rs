//! Public models for the `solution-catalog` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `solution-catalog` module and its consumers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// The role a component plays inside a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Backend,
    Frontend,
    ApiGateway,
    Setup,
}

impl ComponentType {
    /// Returns the canonical string form of the component type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backend => "Backend",
            Self::Frontend => "Frontend",
            Self::ApiGateway => "ApiGateway",
            Self::Setup => "Setup",
        }
    }
}

/// A deployable unit shipped by a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleComponent {
    /// Identifier, unique within the owning module.
    pub id: String,
    pub name: String,
    pub component_type: ComponentType,
    pub description: String,
    pub version: Option<String>,
}

/// A dependency of a module on another module at a given version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDependency {
    pub module_id: String,
    pub name: String,
    pub version: String,
}

impl ModuleDependency {
    #[must_use]
    pub fn new(
        module_id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            module_id: module_id.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Optional descriptive links attached to a module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleAttributes {
    pub documentation: Option<String>,
    pub website: Option<String>,
    pub license: Option<String>,
    /// Source repository URL; used to resolve the module README.
    pub source_repository: Option<String>,
    /// Package registry name to package URL (e.g. `"docker" -> "https://hub.docker.com/..."`).
    pub package_registries: BTreeMap<String, String>,
}

/// A catalog entry describing an installable module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Identifier, unique within the catalog.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Organization maintaining the module.
    pub maintainer: String,
    pub tags: Vec<String>,
    /// Semantic version string of the latest release.
    pub version: String,
    pub last_updated: DateTime<Utc>,
    pub install_command: String,
    pub dependencies: Vec<ModuleDependency>,
    pub attributes: ModuleAttributes,
    pub components: Vec<ModuleComponent>,
}

impl Module {
    /// Returns the source repository URL, if the module declares a non-empty one.
    #[must_use]
    pub fn source_repository(&self) -> Option<&str> {
        self.attributes
            .source_repository
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

/// Deployment status of an environment or of a module inside an environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EnvironmentStatus {
    Running,
    #[default]
    Stopped,
    Error,
}

impl EnvironmentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Error => "error",
        }
    }
}

/// A module-version pair in a solution's manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionModule {
    pub module_id: String,
    pub version: String,
}

impl SolutionModule {
    #[must_use]
    pub fn new(module_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
            version: version.into(),
        }
    }
}

/// A module installed into an environment, with its own status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentModule {
    pub module_id: String,
    pub version: String,
    pub status: EnvironmentStatus,
}

impl EnvironmentModule {
    #[must_use]
    pub fn new(
        module_id: impl Into<String>,
        version: impl Into<String>,
        status: EnvironmentStatus,
    ) -> Self {
        Self {
            module_id: module_id.into(),
            version: version.into(),
            status,
        }
    }
}

/// A deployment target within a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Identifier, unique within the owning solution.
    pub id: String,
    pub name: String,
    /// Deployment-target label (e.g. a Kubernetes namespace).
    pub namespace: String,
    pub status: EnvironmentStatus,
    pub last_deployed: DateTime<Utc>,
    pub modules: Vec<EnvironmentModule>,
}

impl Environment {
    /// Returns `true` if a module with the given identifier is installed.
    #[must_use]
    pub fn has_module(&self, module_id: &str) -> bool {
        self.modules.iter().any(|m| m.module_id == module_id)
    }

    /// Returns `true` if this environment accepts module installs.
    ///
    /// See [`is_development_environment`].
    #[must_use]
    pub fn is_development(&self) -> bool {
        is_development_environment(&self.name, &self.namespace)
    }
}

/// A customer deployment built from catalog modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Customer organization owning the solution.
    pub organization: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Module-version manifest: the modules the solution is meant to run.
    pub modules: Vec<SolutionModule>,
    pub environments: Vec<Environment>,
}

impl Solution {
    /// Returns the environment with the given identifier.
    #[must_use]
    pub fn environment(&self, environment_id: &str) -> Option<&Environment> {
        self.environments.iter().find(|e| e.id == environment_id)
    }

    /// Returns `true` if the manifest lists the given module.
    #[must_use]
    pub fn has_module(&self, module_id: &str) -> bool {
        self.modules.iter().any(|m| m.module_id == module_id)
    }
}

/// Input for creating a new environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEnvironment {
    pub name: String,
    pub namespace: String,
}

impl NewEnvironment {
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

/// Classifies an environment as a development environment.
///
/// An environment qualifies when its name or its namespace contains `"dev"`,
/// compared case-insensitively. Each field is checked on its own. `"development"`
/// is covered by the same substring.
#[must_use]
pub fn is_development_environment(name: &str, namespace: &str) -> bool {
    const MARKER: &str = "dev";
    name.to_lowercase().contains(MARKER) || namespace.to_lowercase().contains(MARKER)
}
