//! Default catalog and registry contents loaded at startup.
//!
//! Timestamps are relative to `now` so the data always looks recent.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use solution_catalog_sdk::{
    ComponentType, Environment, EnvironmentModule, EnvironmentStatus, Module, ModuleAttributes,
    ModuleComponent, ModuleDependency, Solution, SolutionModule,
};

fn component(
    id: &str,
    name: &str,
    component_type: ComponentType,
    description: &str,
    version: Option<&str>,
) -> ModuleComponent {
    ModuleComponent {
        id: id.to_owned(),
        name: name.to_owned(),
        component_type,
        description: description.to_owned(),
        version: version.map(ToOwned::to_owned),
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| (*t).to_owned()).collect()
}

/// Returns the default module catalog.
#[must_use]
pub fn seed_modules(now: DateTime<Utc>) -> Vec<Module> {
    vec![redis_stack(now), postgresql_ha(now)]
}

fn redis_stack(now: DateTime<Utc>) -> Module {
    Module {
        id: "redis-stack".to_owned(),
        name: "Redis Stack".to_owned(),
        description: "Redis with additional modules for advanced data structures".to_owned(),
        maintainer: "Redis Labs".to_owned(),
        tags: tags(&["database", "cache"]),
        version: "7.2.0".to_owned(),
        last_updated: now,
        install_command: "blocc install redis-stack".to_owned(),
        dependencies: vec![ModuleDependency::new("redis-core", "Redis Core", "7.2.0")],
        attributes: ModuleAttributes {
            documentation: Some("https://redis.io/docs/latest/operate/oss_and_stack/".to_owned()),
            website: Some("https://redis.io".to_owned()),
            license: Some("RSALv2".to_owned()),
            source_repository: Some("https://github.com/redis/redis-stack".to_owned()),
            package_registries: BTreeMap::from([(
                "docker".to_owned(),
                "https://hub.docker.com/r/redis/redis-stack".to_owned(),
            )]),
        },
        components: vec![
            component(
                "redis-server",
                "Redis Server",
                ComponentType::Backend,
                "Redis server with JSON, search and time series modules",
                Some("7.2.0"),
            ),
            component(
                "redis-insight",
                "RedisInsight",
                ComponentType::Frontend,
                "Web UI for browsing and profiling data",
                None,
            ),
            component(
                "redis-setup",
                "Cluster Setup",
                ComponentType::Setup,
                "Provisions persistence volumes and default ACLs",
                None,
            ),
        ],
    }
}

fn postgresql_ha(now: DateTime<Utc>) -> Module {
    Module {
        id: "postgresql-ha".to_owned(),
        name: "PostgreSQL HA".to_owned(),
        description: "High availability PostgreSQL cluster".to_owned(),
        maintainer: "Zalando".to_owned(),
        tags: tags(&["database", "ha"]),
        version: "15.4.0".to_owned(),
        last_updated: now - TimeDelta::hours(24),
        install_command: "blocc install postgresql-ha".to_owned(),
        dependencies: vec![
            ModuleDependency::new("postgresql", "PostgreSQL", "15.4.0"),
            ModuleDependency::new("etcd", "etcd", "3.5.0"),
        ],
        attributes: ModuleAttributes {
            documentation: Some("https://patroni.readthedocs.io".to_owned()),
            website: None,
            license: Some("MIT".to_owned()),
            source_repository: Some("https://github.com/zalando/patroni".to_owned()),
            package_registries: BTreeMap::from([(
                "pypi".to_owned(),
                "https://pypi.org/project/patroni/".to_owned(),
            )]),
        },
        components: vec![
            component(
                "patroni",
                "Patroni",
                ComponentType::Backend,
                "Cluster manager handling leader election and failover",
                Some("3.2.0"),
            ),
            component(
                "pgbouncer",
                "PgBouncer",
                ComponentType::ApiGateway,
                "Connection pooler in front of the primary",
                Some("1.21.0"),
            ),
            component(
                "postgresql-setup",
                "Database Setup",
                ComponentType::Setup,
                "Creates the initial roles and databases",
                None,
            ),
        ],
    }
}

fn manifest() -> Vec<SolutionModule> {
    vec![
        SolutionModule::new("redis-stack", "7.2.0"),
        SolutionModule::new("postgresql-ha", "15.4.0"),
    ]
}

fn environment(
    id: &str,
    name: &str,
    namespace: &str,
    status: EnvironmentStatus,
    last_deployed: DateTime<Utc>,
    modules: [(&str, &str, EnvironmentStatus); 2],
) -> Environment {
    Environment {
        id: id.to_owned(),
        name: name.to_owned(),
        namespace: namespace.to_owned(),
        status,
        last_deployed,
        modules: modules
            .into_iter()
            .map(|(module_id, version, status)| EnvironmentModule::new(module_id, version, status))
            .collect(),
    }
}

/// Returns the default solution registry.
#[must_use]
pub fn seed_solutions(now: DateTime<Utc>) -> Vec<Solution> {
    vec![customer_a_core(now), customer_b_analytics(now)]
}

fn customer_a_core(now: DateTime<Utc>) -> Solution {
    use EnvironmentStatus::Running;

    Solution {
        id: "customer-a-core".to_owned(),
        name: "Customer A Core Infrastructure".to_owned(),
        description: "Core infrastructure components for Customer A".to_owned(),
        organization: "Customer A".to_owned(),
        created_at: now - TimeDelta::days(30),
        updated_at: now - TimeDelta::days(2),
        modules: manifest(),
        environments: vec![
            environment(
                "dev-1",
                "Development 1",
                "customer-a-dev-1",
                Running,
                now - TimeDelta::hours(24),
                [
                    ("redis-stack", "7.2.0", Running),
                    ("postgresql-ha", "15.4.0", Running),
                ],
            ),
            environment(
                "staging",
                "Staging",
                "customer-a-staging",
                Running,
                now - TimeDelta::hours(48),
                [
                    ("redis-stack", "7.2.0", Running),
                    ("postgresql-ha", "15.4.0", Running),
                ],
            ),
            environment(
                "prod",
                "Production",
                "customer-a-prod",
                Running,
                now - TimeDelta::hours(72),
                [
                    ("redis-stack", "7.1.0", Running),
                    ("postgresql-ha", "15.3.0", Running),
                ],
            ),
        ],
    }
}

fn customer_b_analytics(now: DateTime<Utc>) -> Solution {
    use EnvironmentStatus::{Error, Running};

    Solution {
        id: "customer-b-analytics".to_owned(),
        name: "Customer B Analytics Platform".to_owned(),
        description: "Data analytics platform for Customer B".to_owned(),
        organization: "Customer B".to_owned(),
        created_at: now - TimeDelta::days(15),
        updated_at: now - TimeDelta::days(1),
        modules: manifest(),
        environments: vec![
            environment(
                "dev",
                "Development",
                "customer-b-dev",
                Running,
                now - TimeDelta::hours(12),
                [
                    ("redis-stack", "7.2.0", Running),
                    ("postgresql-ha", "15.4.0", Error),
                ],
            ),
            environment(
                "prod",
                "Production",
                "customer-b-prod",
                Error,
                now - TimeDelta::hours(36),
                [
                    ("redis-stack", "7.2.0", Running),
                    ("postgresql-ha", "15.4.0", Error),
                ],
            ),
        ],
    }
}
