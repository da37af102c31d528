//! Health module - water intake, acne status, meal logs and skincare routine.

mod health_model;
mod health_service;
mod health_traits;

pub use health_model::{
    AcneStatus, AcneStatusEntry, FoodItem, FoodRecommendation, FoodRecommendations, HealthRecord,
    MealLog, MealType, NewAcneStatus, NewMealLog, NewWaterIntake, SkincareRoutine,
    SkincareUpdate, WaterIntake, ACNE_SAFE_FOODS,
};
pub use health_service::HealthService;
pub use health_traits::{HealthRepositoryTrait, HealthServiceTrait};
