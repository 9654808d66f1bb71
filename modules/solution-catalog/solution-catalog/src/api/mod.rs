//! Transport adapters for the Solution Catalog module.

pub mod rest;
