//! Infrastructure adapters for the domain ports.

pub mod readme;
pub mod storage;

pub use readme::{GithubReadmeProvider, NoopReadmeProvider};
pub use storage::{InMemoryModuleRepository, InMemorySolutionRepository};
