//! REST DTOs for the Solution Catalog module.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use solution_catalog_sdk::{
    Environment, EnvironmentModule, Module, ModuleAttributes, ModuleComponent, ModuleDependency,
    NewEnvironment, Solution, SolutionModule,
};

/// A component shipped by a module.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleComponentDto {
    pub id: String,
    pub name: String,
    /// One of `Backend`, `Frontend`, `ApiGateway`, `Setup`.
    #[serde(rename = "type")]
    pub component_type: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl From<ModuleComponent> for ModuleComponentDto {
    fn from(c: ModuleComponent) -> Self {
        Self {
            id: c.id,
            name: c.name,
            component_type: c.component_type.as_str().to_owned(),
            description: c.description,
            version: c.version,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDependencyDto {
    pub module_id: String,
    pub name: String,
    pub version: String,
}

impl From<ModuleDependency> for ModuleDependencyDto {
    fn from(d: ModuleDependency) -> Self {
        Self {
            module_id: d.module_id,
            name: d.name,
            version: d.version,
        }
    }
}

/// Optional links describing a module.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleAttributesDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_repository: Option<String>,
    /// Registry name to package URL.
    #[serde(default)]
    pub package_registries: BTreeMap<String, String>,
}

impl From<ModuleAttributes> for ModuleAttributesDto {
    fn from(a: ModuleAttributes) -> Self {
        Self {
            documentation: a.documentation,
            website: a.website,
            license: a.license,
            source_repository: a.source_repository,
            package_registries: a.package_registries,
        }
    }
}

/// Response DTO for a catalog module.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub maintainer: String,
    pub tags: Vec<String>,
    pub version: String,
    /// RFC 3339 timestamp of the latest release.
    pub last_updated: DateTime<Utc>,
    pub install_command: String,
    pub dependencies: Vec<ModuleDependencyDto>,
    pub attributes: ModuleAttributesDto,
    pub components: Vec<ModuleComponentDto>,
}

impl From<Module> for ModuleDto {
    fn from(m: Module) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            maintainer: m.maintainer,
            tags: m.tags,
            version: m.version,
            last_updated: m.last_updated,
            install_command: m.install_command,
            dependencies: m.dependencies.into_iter().map(Into::into).collect(),
            attributes: m.attributes.into(),
            components: m.components.into_iter().map(Into::into).collect(),
        }
    }
}

/// Rendered README of a module. Empty when unavailable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadmeDto {
    pub html: String,
}

/// Query parameters for listing modules.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListModulesQuery {
    /// Case-insensitive substring matched against name, description and tags.
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolutionModuleDto {
    pub module_id: String,
    pub version: String,
}

impl From<SolutionModule> for SolutionModuleDto {
    fn from(m: SolutionModule) -> Self {
        Self {
            module_id: m.module_id,
            version: m.version,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentModuleDto {
    pub module_id: String,
    pub version: String,
    /// One of `running`, `stopped`, `error`.
    pub status: String,
}

impl From<EnvironmentModule> for EnvironmentModuleDto {
    fn from(m: EnvironmentModule) -> Self {
        Self {
            module_id: m.module_id,
            version: m.version,
            status: m.status.as_str().to_owned(),
        }
    }
}

/// Response DTO for an environment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentDto {
    pub id: String,
    pub name: String,
    pub namespace: String,
    /// One of `running`, `stopped`, `error`.
    pub status: String,
    pub last_deployed: DateTime<Utc>,
    pub modules: Vec<EnvironmentModuleDto>,
}

impl From<Environment> for EnvironmentDto {
    fn from(e: Environment) -> Self {
        Self {
            id: e.id,
            name: e.name,
            namespace: e.namespace,
            status: e.status.as_str().to_owned(),
            last_deployed: e.last_deployed,
            modules: e.modules.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response DTO for a solution.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolutionDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub organization: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub modules: Vec<SolutionModuleDto>,
    pub environments: Vec<EnvironmentDto>,
}

impl From<Solution> for SolutionDto {
    fn from(s: Solution) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            organization: s.organization,
            created_at: s.created_at,
            updated_at: s.updated_at,
            modules: s.modules.into_iter().map(Into::into).collect(),
            environments: s.environments.into_iter().map(Into::into).collect(),
        }
    }
}

/// Request DTO for adding an environment to a solution.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddEnvironmentRequest {
    pub name: String,
    pub namespace: String,
}

impl From<AddEnvironmentRequest> for NewEnvironment {
    fn from(req: AddEnvironmentRequest) -> Self {
        Self::new(req.name, req.namespace)
    }
}

/// Request DTO for installing a module into an environment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstallModuleRequest {
    pub module_id: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use solution_catalog_sdk::{ComponentType, EnvironmentStatus};

    #[test]
    fn test_environment_dto_is_camel_case() {
        let env = Environment {
            id: "dev".to_owned(),
            name: "Development".to_owned(),
            namespace: "ns-dev".to_owned(),
            status: EnvironmentStatus::Error,
            last_deployed: DateTime::<Utc>::UNIX_EPOCH,
            modules: vec![EnvironmentModule::new("redis", "7", EnvironmentStatus::Stopped)],
        };

        let json = serde_json::to_value(EnvironmentDto::from(env)).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["lastDeployed"], "1970-01-01T00:00:00Z");
        assert_eq!(json["modules"][0]["moduleId"], "redis");
        assert_eq!(json["modules"][0]["status"], "stopped");
    }

    #[test]
    fn test_component_type_field_name() {
        let dto = ModuleComponentDto::from(ModuleComponent {
            id: "gw".to_owned(),
            name: "Gateway".to_owned(),
            component_type: ComponentType::ApiGateway,
            description: String::new(),
            version: None,
        });

        let json = serde_json::to_value(dto).unwrap();
        assert_eq!(json["type"], "ApiGateway");
        assert!(json.get("version").is_none());
    }

    #[test]
    fn test_install_request_deserializes() {
        let req: InstallModuleRequest =
            serde_json::from_str(r#"{"moduleId":"kafka","version":"3.6.0"}"#).unwrap();
        assert_eq!(req.module_id, "kafka");
        assert_eq!(req.version, "3.6.0");
    }
}
