use async_trait::async_trait;

use super::health_model::{
    FoodRecommendations, HealthRecord, NewAcneStatus, NewMealLog, NewWaterIntake, SkincareUpdate,
};
use crate::errors::Result;
use crate::store::DocumentMutation;

/// Persistence contract for per-user health records.
#[async_trait]
pub trait HealthRepositoryTrait: Send + Sync {
    /// Returns the user's health record, creating an empty one if none exists.
    async fn get_or_create_health(&self, user_id: &str) -> Result<HealthRecord>;

    /// Applies `mutation` to the user's health record (created on demand) and saves it.
    async fn modify_health(
        &self,
        user_id: &str,
        mutation: DocumentMutation<HealthRecord>,
    ) -> Result<HealthRecord>;
}

#[async_trait]
pub trait HealthServiceTrait: Send + Sync {
    async fn get_health(&self, user_id: &str) -> Result<HealthRecord>;
    async fn add_water_intake(&self, user_id: &str, intake: NewWaterIntake)
        -> Result<HealthRecord>;
    async fn add_acne_status(&self, user_id: &str, status: NewAcneStatus) -> Result<HealthRecord>;
    async fn add_meal_log(&self, user_id: &str, meal: NewMealLog) -> Result<HealthRecord>;
    async fn update_skincare(&self, user_id: &str, update: SkincareUpdate)
        -> Result<HealthRecord>;
    fn food_recommendations(&self) -> FoodRecommendations;
}
