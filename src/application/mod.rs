//! Application layer: services orchestrating the repositories.

pub mod pagination;
pub mod services;
