use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use unilife_core::schedule::{NewClassBlock, NewSleepLog, NewStudySession, Schedule, ScheduleSync};

use super::ApiJson;
use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_schedule(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Schedule>> {
    let schedule = state.schedule_service.get_schedule(user.id()).await?;
    Ok(Json(schedule))
}

async fn add_class(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewClassBlock>,
) -> ApiResult<Json<Schedule>> {
    let schedule = state.schedule_service.add_class(user.id(), payload).await?;
    Ok(Json(schedule))
}

async fn add_study_session(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewStudySession>,
) -> ApiResult<Json<Schedule>> {
    let schedule = state
        .schedule_service
        .add_study_session(user.id(), payload)
        .await?;
    Ok(Json(schedule))
}

async fn add_sleep_log(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewSleepLog>,
) -> ApiResult<Json<Schedule>> {
    let schedule = state
        .schedule_service
        .add_sleep_log(user.id(), payload)
        .await?;
    Ok(Json(schedule))
}

async fn sync_schedule(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ScheduleSync>> {
    let sync = state.schedule_service.sync_schedule(user.id())?;
    Ok(Json(sync))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/schedule", get(get_schedule))
        .route("/schedule/class", post(add_class))
        .route("/schedule/study", post(add_study_session))
        .route("/schedule/sleep", post(add_sleep_log))
        .route("/schedule/sync", post(sync_schedule))
}
