//! SQLite storage implementation for health records.

mod model;
mod repository;

pub use model::{HealthDocument, WaterIntakeRecord};
pub use repository::HealthRepository;
