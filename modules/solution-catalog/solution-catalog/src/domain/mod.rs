//! Domain layer: lifecycle rules, services and the ports they depend on.

pub mod error;
pub mod lifecycle;
pub mod ports;
pub mod repo;
pub mod service;
