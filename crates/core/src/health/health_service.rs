use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::health_model::{
    FoodRecommendations, HealthRecord, NewAcneStatus, NewMealLog, NewWaterIntake, SkincareUpdate,
    ACNE_SAFE_FOODS,
};
use super::health_traits::{HealthRepositoryTrait, HealthServiceTrait};
use crate::errors::Result;

pub struct HealthService {
    repository: Arc<dyn HealthRepositoryTrait>,
}

impl HealthService {
    pub fn new(repository: Arc<dyn HealthRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn get_health(&self, user_id: &str) -> Result<HealthRecord> {
        self.repository.get_or_create_health(user_id).await
    }

    async fn add_water_intake(
        &self,
        user_id: &str,
        intake: NewWaterIntake,
    ) -> Result<HealthRecord> {
        intake.validate()?;
        let intake = intake.into_water_intake(Utc::now());
        self.repository
            .modify_health(
                user_id,
                Box::new(move |health| {
                    health.water_intake.push(intake);
                    Ok(())
                }),
            )
            .await
    }

    async fn add_acne_status(&self, user_id: &str, status: NewAcneStatus) -> Result<HealthRecord> {
        let entry = status.into_entry(Utc::now());
        debug!("Logging acne status {:?} for user {}", entry.status, user_id);
        self.repository
            .modify_health(
                user_id,
                Box::new(move |health| {
                    health.acne_status.push(entry);
                    Ok(())
                }),
            )
            .await
    }

    async fn add_meal_log(&self, user_id: &str, meal: NewMealLog) -> Result<HealthRecord> {
        meal.validate()?;
        let meal = meal.into_meal_log(Utc::now());
        self.repository
            .modify_health(
                user_id,
                Box::new(move |health| {
                    health.meal_logs.push(meal);
                    Ok(())
                }),
            )
            .await
    }

    async fn update_skincare(
        &self,
        user_id: &str,
        update: SkincareUpdate,
    ) -> Result<HealthRecord> {
        self.repository
            .modify_health(
                user_id,
                Box::new(move |health| {
                    health.skincare_routine.apply(update);
                    Ok(())
                }),
            )
            .await
    }

    fn food_recommendations(&self) -> FoodRecommendations {
        FoodRecommendations {
            recommendations: ACNE_SAFE_FOODS,
        }
    }
}
