//! Solution Catalog Module Implementation
//!
//! Browses installable modules and manages the lifecycle of customer
//! solutions and their deployment environments. The public API is defined in
//! `solution-catalog-sdk` and re-exported here.
//!
//! ## Architecture
//!
//! - **Immutable catalog**: modules are indexed once at startup and shared without locking
//! - **Atomic registry**: every solution mutation runs on a copy swapped in under a write lock
//! - **README lookup**: rendered through the GitHub API, failures degrade to an empty README

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === PUBLIC API (from SDK) ===
pub use solution_catalog_sdk::{
    ComponentType, Environment, EnvironmentModule, EnvironmentStatus, Module, ModuleAttributes,
    ModuleCatalogApi, ModuleComponent, ModuleDependency, NewEnvironment, Solution,
    SolutionCatalogError, SolutionModule, SolutionRegistryApi, is_development_environment,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::SolutionCatalogModule;

pub mod local_client;

// === CONFIGURATION ===
pub mod config;
pub use config::{ReadmeConfig, SolutionCatalogConfig};

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
