use async_trait::async_trait;
use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use super::budget_pacing::DailyLimitReport;
use super::finance_model::{Finance, NewExpense, NewSavingsGoal, SavingsDeposit};
use crate::errors::Result;
use crate::store::DocumentMutation;

/// Persistence contract for per-user finance ledgers.
#[async_trait]
pub trait FinanceRepositoryTrait: Send + Sync {
    /// Loads the user's finance record without creating it.
    fn load_finance(&self, user_id: &str) -> Result<Option<Finance>>;

    /// Returns the user's finance record, creating a zeroed one if none exists.
    async fn get_or_create_finance(&self, user_id: &str) -> Result<Finance>;

    /// Applies `mutation` to the user's finance record (created on demand)
    /// and saves it atomically. Nothing is saved if the mutation fails.
    async fn modify_finance(
        &self,
        user_id: &str,
        mutation: DocumentMutation<Finance>,
    ) -> Result<Finance>;
}

#[async_trait]
pub trait FinanceServiceTrait: Send + Sync {
    async fn get_finance(&self, user_id: &str) -> Result<Finance>;
    async fn add_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Finance>;

    /// Sets the monthly allowance. Backs both allowance endpoints.
    async fn set_monthly_allowance(&self, user_id: &str, allowance: Decimal) -> Result<Finance>;

    async fn add_savings_goal(&self, user_id: &str, new_goal: NewSavingsGoal) -> Result<Finance>;

    /// Adds `deposit` to a goal's current amount.
    ///
    /// Fails with `NotFound` when the user has no finance record or no goal
    /// with that id.
    async fn deposit_savings(
        &self,
        user_id: &str,
        goal_id: &str,
        deposit: SavingsDeposit,
    ) -> Result<Finance>;

    /// Daily budget pacing for the current local day.
    fn get_daily_limit(&self, user_id: &str) -> Result<DailyLimitReport>;

    /// Daily budget pacing for the local day containing `reference`.
    fn get_daily_limit_at(
        &self,
        user_id: &str,
        reference: DateTime<Local>,
    ) -> Result<DailyLimitReport>;
}
