//! UniLife Core - Domain entities, services, and traits.
//!
//! This crate contains the planning logic for the student-life tracker:
//! class conflict detection, daily budget pacing and the services around
//! them. It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod finance;
pub mod health;
pub mod schedule;
pub mod store;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
