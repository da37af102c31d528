//! Health tracking models.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result};
use crate::utils::{require_non_negative, require_text};

/// Water drunk at one point in time, in litres.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaterIntake {
    pub id: String,
    pub date: DateTime<Utc>,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWaterIntake {
    pub amount: Decimal,
}

impl NewWaterIntake {
    pub fn validate(&self) -> Result<()> {
        require_non_negative(self.amount, "amount")
    }

    pub fn into_water_intake(self, date: DateTime<Utc>) -> WaterIntake {
        WaterIntake {
            id: Uuid::new_v4().to_string(),
            date,
            amount: self.amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcneStatus {
    Clear,
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AcneStatusEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub status: AcneStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAcneStatus {
    pub status: AcneStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewAcneStatus {
    pub fn into_entry(self, date: DateTime<Utc>) -> AcneStatusEntry {
        AcneStatusEntry {
            id: Uuid::new_v4().to_string(),
            date,
            status: self.status,
            notes: trimmed(self.notes),
            tags: self
                .tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

fn default_acne_safe() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub name: String,
    #[serde(default = "default_acne_safe")]
    pub is_acne_safe: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealLog {
    pub id: String,
    pub date: DateTime<Utc>,
    pub meal_type: MealType,
    pub foods: Vec<FoodItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMealLog {
    pub meal_type: MealType,
    pub foods: Vec<FoodItem>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewMealLog {
    pub fn validate(&self) -> Result<()> {
        if self.foods.is_empty() {
            return Err(Error::invalid_input("A meal needs at least one food"));
        }
        for food in &self.foods {
            require_text(&food.name, "foods.name")?;
        }
        Ok(())
    }

    pub fn into_meal_log(self, date: DateTime<Utc>) -> MealLog {
        MealLog {
            id: Uuid::new_v4().to_string(),
            date,
            meal_type: self.meal_type,
            foods: self
                .foods
                .into_iter()
                .map(|f| FoodItem {
                    name: f.name.trim().to_string(),
                    is_acne_safe: f.is_acne_safe,
                })
                .collect(),
            notes: trimmed(self.notes),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkincareRoutine {
    #[serde(default)]
    pub face_wash: bool,
    #[serde(default)]
    pub moisturizer: bool,
    #[serde(default)]
    pub sunscreen: bool,
}

/// Partial skincare update; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkincareUpdate {
    #[serde(default)]
    pub face_wash: Option<bool>,
    #[serde(default)]
    pub moisturizer: Option<bool>,
    #[serde(default)]
    pub sunscreen: Option<bool>,
}

impl SkincareRoutine {
    pub fn apply(&mut self, update: SkincareUpdate) {
        if let Some(v) = update.face_wash {
            self.face_wash = v;
        }
        if let Some(v) = update.moisturizer {
            self.moisturizer = v;
        }
        if let Some(v) = update.sunscreen {
            self.sunscreen = v;
        }
    }
}

/// Per-user health aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub user_id: String,
    pub water_intake: Vec<WaterIntake>,
    pub acne_status: Vec<AcneStatusEntry>,
    pub meal_logs: Vec<MealLog>,
    pub skincare_routine: SkincareRoutine,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl HealthRecord {
    pub fn empty(user_id: &str) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            user_id: user_id.to_string(),
            water_intake: Vec::new(),
            acne_status: Vec::new(),
            meal_logs: Vec::new(),
            skincare_routine: SkincareRoutine::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoodRecommendation {
    pub name: &'static str,
    pub description: &'static str,
    pub benefits: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodRecommendations {
    pub recommendations: &'static [FoodRecommendation],
}

pub const ACNE_SAFE_FOODS: &[FoodRecommendation] = &[
    FoodRecommendation {
        name: "Gado-gado",
        description: "Low-glycemic vegetable-based dish",
        benefits: "Rich in fiber, supports skin health",
    },
    FoodRecommendation {
        name: "Soto Bening",
        description: "Herbal chicken soup",
        benefits: "Anti-inflammatory properties",
    },
    FoodRecommendation {
        name: "Ayam Bakar",
        description: "Grilled chicken",
        benefits: "Lean protein, healthy fats",
    },
    FoodRecommendation {
        name: "Sayur Asem",
        description: "Vegetable soup with tamarind",
        benefits: "Vitamin-rich, hydrating",
    },
    FoodRecommendation {
        name: "Tempeh",
        description: "Fermented soybean",
        benefits: "Probiotics, plant-based protein",
    },
    FoodRecommendation {
        name: "Nasi Merah",
        description: "Brown rice",
        benefits: "Complex carbs, sustained energy",
    },
];

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
