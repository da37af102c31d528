//! SQLite storage implementation for finance ledgers.

mod model;
mod repository;

pub use model::{ExpenseRecord, FinanceDocument, SavingsGoalRecord};
pub use repository::FinanceRepository;
