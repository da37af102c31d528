use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use unilife_core::health::{
    FoodRecommendations, HealthRecord, NewAcneStatus, NewMealLog, NewWaterIntake, SkincareUpdate,
};

use super::ApiJson;
use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_health(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HealthRecord>> {
    let record = state.health_service.get_health(user.id()).await?;
    Ok(Json(record))
}

async fn add_water_intake(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewWaterIntake>,
) -> ApiResult<Json<HealthRecord>> {
    let record = state
        .health_service
        .add_water_intake(user.id(), payload)
        .await?;
    Ok(Json(record))
}

async fn add_acne_status(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewAcneStatus>,
) -> ApiResult<Json<HealthRecord>> {
    let record = state
        .health_service
        .add_acne_status(user.id(), payload)
        .await?;
    Ok(Json(record))
}

async fn add_meal_log(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewMealLog>,
) -> ApiResult<Json<HealthRecord>> {
    let record = state.health_service.add_meal_log(user.id(), payload).await?;
    Ok(Json(record))
}

async fn update_skincare(
    user: CurrentUser,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<SkincareUpdate>,
) -> ApiResult<Json<HealthRecord>> {
    let record = state
        .health_service
        .update_skincare(user.id(), payload)
        .await?;
    Ok(Json(record))
}

// Static content, but still behind the identity check like every other route.
async fn get_recommendations(
    _user: CurrentUser,
    State(state): State<Arc<AppState>>,
) -> Json<FoodRecommendations> {
    Json(state.health_service.food_recommendations())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(get_health))
        .route("/health/water", post(add_water_intake))
        .route("/health/acne", post(add_acne_status))
        .route("/health/meal", post(add_meal_log))
        .route("/health/skincare", post(update_skincare))
        .route("/health/recommendations", get(get_recommendations))
}
