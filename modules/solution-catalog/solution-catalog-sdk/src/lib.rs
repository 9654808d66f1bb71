//! Solution Catalog SDK
//!
//! This crate provides the public API for the `solution-catalog` module:
//! - `ModuleCatalogApi` trait for browsing installable modules
//! - `SolutionRegistryApi` trait for solutions, environments and installs
//! - `Module`, `Solution`, `Environment` and related models
//! - `SolutionCatalogError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use solution_catalog_sdk::{NewEnvironment, SolutionRegistryApi};
//!
//! let envs = registry
//!     .add_environment("customer-a-core", NewEnvironment::new("QA", "customer-a-qa"))
//!     .await?;
//!
//! let env = registry
//!     .install_module("customer-a-core", "dev-1", "kafka", "3.6.0")
//!     .await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root for convenience
pub use api::{ModuleCatalogApi, SolutionRegistryApi};
pub use error::SolutionCatalogError;
pub use models::{
    ComponentType, Environment, EnvironmentModule, EnvironmentStatus, Module, ModuleAttributes,
    ModuleComponent, ModuleDependency, NewEnvironment, Solution, SolutionModule,
    is_development_environment,
};
