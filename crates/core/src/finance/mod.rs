//! Finance module - expense ledger, allowance, savings goals and budget pacing.

mod budget_pacing;
mod finance_model;
mod finance_service;
mod finance_traits;

pub use budget_pacing::{
    compute_daily_limit, BudgetPace, DailyBudget, DailyLimitReport, NoBudget,
};
pub use finance_model::{
    AllowanceUpdate, BudgetUpdate, Expense, ExpenseCategory, Finance, NewExpense,
    NewSavingsGoal, SavingsDeposit, SavingsGoal,
};
pub use finance_service::FinanceService;
pub use finance_traits::{FinanceRepositoryTrait, FinanceServiceTrait};
