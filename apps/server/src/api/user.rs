use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use unilife_core::users::{NewUserProfile, UserProfile, UserProfileUpdate};

use super::ApiJson;
use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_profile(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<UserProfile>> {
    let profile = state.user_service.get_profile(user.id())?;
    Ok(Json(profile))
}

async fn create_profile(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewUserProfile>,
) -> ApiResult<(StatusCode, Json<UserProfile>)> {
    let profile = state
        .user_service
        .create_profile(user.id(), payload)
        .await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

async fn update_profile(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<UserProfileUpdate>,
) -> ApiResult<Json<UserProfile>> {
    let profile = state
        .user_service
        .update_profile(user.id(), payload)
        .await?;
    Ok(Json(profile))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/user/profile",
        get(get_profile).post(create_profile).put(update_profile),
    )
}
