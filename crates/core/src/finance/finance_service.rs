use async_trait::async_trait;
use chrono::{DateTime, Local, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::budget_pacing::{
    amount_out_of_range, checked_sum, compute_daily_limit, DailyLimitReport,
};
use super::finance_model::{Finance, NewExpense, NewSavingsGoal, SavingsDeposit};
use super::finance_traits::{FinanceRepositoryTrait, FinanceServiceTrait};
use crate::errors::{Error, Result};
use crate::utils::require_non_negative;

pub struct FinanceService {
    repository: Arc<dyn FinanceRepositoryTrait>,
}

impl FinanceService {
    pub fn new(repository: Arc<dyn FinanceRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FinanceServiceTrait for FinanceService {
    async fn get_finance(&self, user_id: &str) -> Result<Finance> {
        self.repository.get_or_create_finance(user_id).await
    }

    async fn add_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Finance> {
        new_expense.validate()?;
        let expense = new_expense.into_expense(Utc::now());
        debug!(
            "Recording expense of {} ({:?}) for user {}",
            expense.amount, expense.category, user_id
        );
        self.repository
            .modify_finance(
                user_id,
                Box::new(move |finance| {
                    // Keeps every day's total summable.
                    checked_sum(
                        finance
                            .expenses
                            .iter()
                            .map(|e| e.amount)
                            .chain(std::iter::once(expense.amount)),
                    )?;
                    finance.expenses.push(expense);
                    Ok(())
                }),
            )
            .await
    }

    async fn set_monthly_allowance(&self, user_id: &str, allowance: Decimal) -> Result<Finance> {
        require_non_negative(allowance, "allowance")?;
        self.repository
            .modify_finance(
                user_id,
                Box::new(move |finance| {
                    finance.monthly_allowance = allowance;
                    Ok(())
                }),
            )
            .await
    }

    async fn add_savings_goal(&self, user_id: &str, new_goal: NewSavingsGoal) -> Result<Finance> {
        new_goal.validate()?;
        let goal = new_goal.into_savings_goal()?;
        self.repository
            .modify_finance(
                user_id,
                Box::new(move |finance| {
                    finance.savings_goals.push(goal);
                    Ok(())
                }),
            )
            .await
    }

    async fn deposit_savings(
        &self,
        user_id: &str,
        goal_id: &str,
        deposit: SavingsDeposit,
    ) -> Result<Finance> {
        deposit.validate()?;
        if self.repository.load_finance(user_id)?.is_none() {
            return Err(Error::NotFound("Finance data not found".to_string()));
        }

        let goal_id = goal_id.to_string();
        let amount = deposit.amount;
        self.repository
            .modify_finance(
                user_id,
                Box::new(move |finance| {
                    let goal = finance.savings_goal_mut(&goal_id).ok_or_else(|| {
                        warn!("Deposit into unknown savings goal {}", goal_id);
                        Error::NotFound("Savings goal not found".to_string())
                    })?;
                    goal.current_amount = goal
                        .current_amount
                        .checked_add(amount)
                        .ok_or_else(amount_out_of_range)?;
                    Ok(())
                }),
            )
            .await
    }

    fn get_daily_limit(&self, user_id: &str) -> Result<DailyLimitReport> {
        self.get_daily_limit_at(user_id, Local::now())
    }

    fn get_daily_limit_at(
        &self,
        user_id: &str,
        reference: DateTime<Local>,
    ) -> Result<DailyLimitReport> {
        let Some(finance) = self.repository.load_finance(user_id)? else {
            return Ok(DailyLimitReport::no_finance_record());
        };
        let pace = compute_daily_limit(finance.monthly_allowance, &finance.expenses, &reference)?;
        Ok(DailyLimitReport::Paced(pace.to_report()))
    }
}
