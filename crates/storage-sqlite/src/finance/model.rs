//! Stored form of a user's finance ledger.
//!
//! Money is kept as decimal strings so a ledger reads back exactly what was
//! written; the API's float encoding stops at the HTTP boundary.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::documents::{DocumentMeta, UserDocument};
use unilife_core::finance::{Expense, ExpenseCategory, Finance, SavingsGoal};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub category: ExpenseCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Expense> for ExpenseRecord {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            date: expense.date,
            amount: expense.amount,
            category: expense.category,
            description: expense.description,
        }
    }
}

impl From<ExpenseRecord> for Expense {
    fn from(record: ExpenseRecord) -> Self {
        Self {
            id: record.id,
            date: record.date,
            amount: record.amount,
            category: record.category,
            description: record.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalRecord {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub target_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub current_amount: Decimal,
    pub deadline: DateTime<Utc>,
}

impl From<SavingsGoal> for SavingsGoalRecord {
    fn from(goal: SavingsGoal) -> Self {
        Self {
            id: goal.id,
            name: goal.name,
            target_amount: goal.target_amount,
            current_amount: goal.current_amount,
            deadline: goal.deadline,
        }
    }
}

impl From<SavingsGoalRecord> for SavingsGoal {
    fn from(record: SavingsGoalRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            target_amount: record.target_amount,
            current_amount: record.current_amount,
            deadline: record.deadline,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceDocument {
    #[serde(default, with = "rust_decimal::serde::str")]
    pub monthly_allowance: Decimal,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
    #[serde(default)]
    pub savings_goals: Vec<SavingsGoalRecord>,
}

impl UserDocument for FinanceDocument {
    const KIND: &'static str = "finance";

    type Aggregate = Finance;

    fn into_aggregate(self, meta: DocumentMeta) -> Finance {
        Finance {
            user_id: meta.user_id,
            monthly_allowance: self.monthly_allowance,
            expenses: self.expenses.into_iter().map(Expense::from).collect(),
            savings_goals: self.savings_goals.into_iter().map(SavingsGoal::from).collect(),
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    fn from_aggregate(finance: Finance) -> Self {
        Self {
            monthly_allowance: finance.monthly_allowance,
            expenses: finance.expenses.into_iter().map(ExpenseRecord::from).collect(),
            savings_goals: finance
                .savings_goals
                .into_iter()
                .map(SavingsGoalRecord::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_is_stored_as_decimal_strings() {
        let document = FinanceDocument {
            monthly_allowance: dec!(12345678901234567.89),
            ..Default::default()
        };
        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["monthlyAllowance"], "12345678901234567.89");

        let back: FinanceDocument = serde_json::from_value(json).unwrap();
        assert_eq!(back.monthly_allowance, dec!(12345678901234567.89));
    }
}
