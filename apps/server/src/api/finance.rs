use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use unilife_core::finance::{
    AllowanceUpdate, BudgetUpdate, DailyLimitReport, Finance, NewExpense, NewSavingsGoal,
    SavingsDeposit,
};

use super::ApiJson;
use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_finance(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Finance>> {
    let finance = state.finance_service.get_finance(user.id()).await?;
    Ok(Json(finance))
}

async fn add_expense(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewExpense>,
) -> ApiResult<Json<Finance>> {
    let finance = state.finance_service.add_expense(user.id(), payload).await?;
    Ok(Json(finance))
}

async fn update_allowance(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<AllowanceUpdate>,
) -> ApiResult<Json<Finance>> {
    let finance = state
        .finance_service
        .set_monthly_allowance(user.id(), payload.allowance)
        .await?;
    Ok(Json(finance))
}

async fn update_budget(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<BudgetUpdate>,
) -> ApiResult<Json<Finance>> {
    let finance = state
        .finance_service
        .set_monthly_allowance(user.id(), payload.monthly_allowance)
        .await?;
    Ok(Json(finance))
}

async fn get_daily_limit(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DailyLimitReport>> {
    let report = state.finance_service.get_daily_limit(user.id())?;
    Ok(Json(report))
}

async fn add_savings_goal(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewSavingsGoal>,
) -> ApiResult<Json<Finance>> {
    let finance = state
        .finance_service
        .add_savings_goal(user.id(), payload)
        .await?;
    Ok(Json(finance))
}

async fn deposit_savings(
    user: CurrentUser,
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<SavingsDeposit>,
) -> ApiResult<Json<Finance>> {
    let finance = state
        .finance_service
        .deposit_savings(user.id(), &goal_id, payload)
        .await?;
    Ok(Json(finance))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/finance", get(get_finance))
        .route("/finance/expense", post(add_expense))
        .route("/finance/allowance", put(update_allowance))
        .route("/finance/update-budget", post(update_budget))
        .route("/finance/daily-limit", get(get_daily_limit))
        .route("/finance/savings-goal", post(add_savings_goal))
        .route("/finance/savings/{goal_id}", put(deposit_savings))
}
