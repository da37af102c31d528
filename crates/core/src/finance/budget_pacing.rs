//! Daily budget pacing.
//!
//! Spreads a monthly allowance evenly over a fixed-length period and compares
//! the resulting daily limit against what was spent on the reference day.

use chrono::{DateTime, TimeZone};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::finance_model::Expense;
use crate::constants::{DAYS_PER_BUDGETING_PERIOD, DISPLAY_DECIMAL_PRECISION};
use crate::errors::{Error, Result};
use crate::utils::day_window;

/// Unrounded pacing figures for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetPace {
    pub daily_limit: Decimal,
    pub spent_today: Decimal,
    /// `daily_limit - spent_today`; negative once the day is overspent.
    pub balance: Decimal,
}

impl BudgetPace {
    /// What is left for the day, never below zero.
    pub fn remaining(&self) -> Decimal {
        self.balance.max(Decimal::ZERO)
    }

    /// How far spending went past the daily limit, zero when within it.
    pub fn overspend(&self) -> Decimal {
        (-self.balance).max(Decimal::ZERO)
    }

    pub fn to_report(&self) -> DailyBudget {
        DailyBudget {
            daily_limit: format_amount(self.daily_limit),
            spent_today: format_amount(self.spent_today),
            remaining: format_amount(self.remaining()),
        }
    }
}

/// Pacing figures rendered with two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBudget {
    pub daily_limit: String,
    pub spent_today: String,
    pub remaining: String,
}

/// Placeholder returned when the user has no finance record yet.
///
/// Unlike [`DailyBudget`] the values are plain numbers and `spentToday` is
/// absent; clients rely on that shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoBudget {
    pub daily_limit: u32,
    pub remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DailyLimitReport {
    Paced(DailyBudget),
    NoFinanceRecord(NoBudget),
}

impl DailyLimitReport {
    pub fn no_finance_record() -> Self {
        DailyLimitReport::NoFinanceRecord(NoBudget {
            daily_limit: 0,
            remaining: 0,
        })
    }
}

/// Computes the pace for the calendar day containing `reference`.
///
/// The day is the half-open window `[midnight, next midnight)` in the
/// reference's time zone. Expenses outside it are ignored.
pub fn compute_daily_limit<Tz: TimeZone>(
    monthly_allowance: Decimal,
    expenses: &[Expense],
    reference: &DateTime<Tz>,
) -> Result<BudgetPace> {
    let (start, end) = day_window(reference);

    let spent_today = checked_sum(
        expenses
            .iter()
            .filter(|e| e.date >= start && e.date < end)
            .map(|e| e.amount),
    )?;
    let daily_limit = monthly_allowance / Decimal::from(DAYS_PER_BUDGETING_PERIOD);
    let balance = daily_limit
        .checked_sub(spent_today)
        .ok_or_else(amount_out_of_range)?;

    Ok(BudgetPace {
        daily_limit,
        spent_today,
        balance,
    })
}

/// Adds up amounts, failing instead of overflowing.
pub(crate) fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
        .ok_or_else(amount_out_of_range)
}

pub(crate) fn amount_out_of_range() -> Error {
    Error::invalid_input("Amounts add up to more than the largest supported value")
}

fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::ExpenseCategory;
    use chrono::{Duration, FixedOffset, Utc};
    use rust_decimal_macros::dec;

    fn expense_at<Tz: TimeZone>(date: DateTime<Tz>, amount: Decimal) -> Expense {
        Expense {
            id: format!("e-{amount}"),
            date: date.with_timezone(&Utc),
            amount,
            category: ExpenseCategory::Food,
            description: None,
        }
    }

    fn jakarta() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    #[test]
    fn no_expenses_leaves_full_limit() {
        let now = jakarta().with_ymd_and_hms(2025, 3, 14, 15, 0, 0).unwrap();
        let report = compute_daily_limit(dec!(300), &[], &now).unwrap().to_report();

        assert_eq!(report.daily_limit, "10.00");
        assert_eq!(report.spent_today, "0.00");
        assert_eq!(report.remaining, "10.00");
    }

    #[test]
    fn overspending_floors_remaining_at_zero() {
        let now = jakarta().with_ymd_and_hms(2025, 3, 14, 20, 0, 0).unwrap();
        let expenses = vec![
            expense_at(now - Duration::hours(3), dec!(12)),
            expense_at(now - Duration::hours(1), dec!(3)),
        ];

        let pace = compute_daily_limit(dec!(300), &expenses, &now).unwrap();
        assert_eq!(pace.spent_today, dec!(15));
        assert_eq!(pace.balance, dec!(-5));
        assert_eq!(pace.overspend(), dec!(5));

        let report = pace.to_report();
        assert_eq!(report.spent_today, "15.00");
        assert_eq!(report.remaining, "0.00");
    }

    #[test]
    fn window_is_half_open() {
        let tz = jakarta();
        let now = tz.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        let midnight = tz.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap();
        let next_midnight = tz.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap();
        let expenses = vec![
            expense_at(midnight, dec!(2)),
            expense_at(next_midnight, dec!(50)),
            expense_at(midnight - Duration::seconds(1), dec!(40)),
        ];

        let pace = compute_daily_limit(dec!(300), &expenses, &now).unwrap();
        assert_eq!(pace.spent_today, dec!(2));
        assert_eq!(pace.remaining(), dec!(8));
    }

    #[test]
    fn day_boundary_follows_reference_zone() {
        // 23:00 UTC on the 13th is already the 14th in UTC+7.
        let late_utc = Utc.with_ymd_and_hms(2025, 3, 13, 23, 0, 0).unwrap();
        let expenses = vec![expense_at(late_utc, dec!(4))];

        let in_jakarta = jakarta().with_ymd_and_hms(2025, 3, 14, 8, 0, 0).unwrap();
        let in_utc = Utc.with_ymd_and_hms(2025, 3, 14, 8, 0, 0).unwrap();

        let pace = compute_daily_limit(dec!(300), &expenses, &in_jakarta).unwrap();
        assert_eq!(pace.spent_today, dec!(4));
        let pace = compute_daily_limit(dec!(300), &expenses, &in_utc).unwrap();
        assert_eq!(pace.spent_today, dec!(0));
    }

    #[test]
    fn uneven_limit_is_rounded_for_display() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        let report = compute_daily_limit(dec!(100), &[], &now).unwrap().to_report();
        assert_eq!(report.daily_limit, "3.33");
        assert_eq!(report.remaining, "3.33");

        let report = compute_daily_limit(dec!(200), &[], &now).unwrap().to_report();
        assert_eq!(report.daily_limit, "6.67");
    }

    #[test]
    fn missing_record_has_numeric_shape_without_spent_today() {
        let json = serde_json::to_value(DailyLimitReport::no_finance_record()).unwrap();
        assert_eq!(json, serde_json::json!({ "dailyLimit": 0, "remaining": 0 }));
    }

    #[test]
    fn paced_report_serializes_strings() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        let pace = compute_daily_limit(dec!(300), &[], &now).unwrap();
        let report = DailyLimitReport::Paced(pace.to_report());
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "dailyLimit": "10.00", "spentToday": "0.00", "remaining": "10.00" })
        );
    }

    #[test]
    fn overflowing_day_total_is_an_error() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        let expenses = vec![
            expense_at(now - Duration::hours(2), dec!(50000000000000000000000000000)),
            expense_at(now - Duration::hours(1), dec!(50000000000000000000000000000)),
        ];

        let err = compute_daily_limit(dec!(300), &expenses, &now).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn checked_sum_stops_at_overflow() {
        assert_eq!(checked_sum([dec!(1.5), dec!(2.25)]).unwrap(), dec!(3.75));
        assert!(checked_sum([Decimal::MAX, dec!(1)]).is_err());
    }
}
