//! cabinet-core
//!
//! Pure domain types, practice configuration, and the persistence-boundary
//! traits. No I/O; this is the shared vocabulary of the cabinet system.

pub mod config;
pub mod error;
pub mod models;
pub mod store;
