//! SQLite storage implementation for schedules.

mod model;
mod repository;

pub use model::ScheduleDocument;
pub use repository::ScheduleRepository;
