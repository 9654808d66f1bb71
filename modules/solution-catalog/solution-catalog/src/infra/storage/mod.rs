//! In-memory storage and the default seed data.

mod in_memory_repo;
pub mod seed;

pub use in_memory_repo::{InMemoryModuleRepository, InMemorySolutionRepository};
