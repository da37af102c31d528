//! Finance domain models.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::Result;
use crate::utils::{parse_iso_datetime, require_non_negative, require_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    #[serde(rename = "Study Materials")]
    StudyMaterials,
    Health,
    Other,
}

/// One entry of the append-only expense ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub date: DateTime<Utc>,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input model for recording an expense. The date is stamped on insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub amount: Decimal,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewExpense {
    pub fn validate(&self) -> Result<()> {
        require_non_negative(self.amount, "amount")
    }

    pub fn into_expense(self, date: DateTime<Utc>) -> Expense {
        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Expense {
            id: Uuid::new_v4().to_string(),
            date,
            amount: self.amount,
            category: self.category,
            description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingsGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub deadline: String,
}

impl NewSavingsGoal {
    pub fn validate(&self) -> Result<()> {
        require_text(&self.name, "name")?;
        require_non_negative(self.target_amount, "targetAmount")?;
        parse_iso_datetime(&self.deadline, "deadline")?;
        Ok(())
    }

    pub fn into_savings_goal(self) -> Result<SavingsGoal> {
        Ok(SavingsGoal {
            id: Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            target_amount: self.target_amount,
            current_amount: Decimal::ZERO,
            deadline: parse_iso_datetime(&self.deadline, "deadline")?,
        })
    }
}

/// Body of `PUT /finance/allowance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceUpdate {
    pub allowance: Decimal,
}

/// Body of `POST /finance/update-budget`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    pub monthly_allowance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsDeposit {
    pub amount: Decimal,
}

impl SavingsDeposit {
    pub fn validate(&self) -> Result<()> {
        require_non_negative(self.amount, "amount")
    }
}

/// Per-user finance aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Finance {
    pub user_id: String,
    pub monthly_allowance: Decimal,
    pub expenses: Vec<Expense>,
    pub savings_goals: Vec<SavingsGoal>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Finance {
    pub fn empty(user_id: &str) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            user_id: user_id.to_string(),
            monthly_allowance: Decimal::ZERO,
            expenses: Vec::new(),
            savings_goals: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn savings_goal_mut(&mut self, goal_id: &str) -> Option<&mut SavingsGoal> {
        self.savings_goals.iter_mut().find(|g| g.id == goal_id)
    }
}
