//! Stored form of a user's health record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::documents::{DocumentMeta, UserDocument};
use unilife_core::health::{AcneStatusEntry, HealthRecord, MealLog, SkincareRoutine, WaterIntake};

/// Water intake with the amount kept as a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterIntakeRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

impl From<WaterIntake> for WaterIntakeRecord {
    fn from(intake: WaterIntake) -> Self {
        Self {
            id: intake.id,
            date: intake.date,
            amount: intake.amount,
        }
    }
}

impl From<WaterIntakeRecord> for WaterIntake {
    fn from(record: WaterIntakeRecord) -> Self {
        Self {
            id: record.id,
            date: record.date,
            amount: record.amount,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDocument {
    #[serde(default)]
    pub water_intake: Vec<WaterIntakeRecord>,
    #[serde(default)]
    pub acne_status: Vec<AcneStatusEntry>,
    #[serde(default)]
    pub meal_logs: Vec<MealLog>,
    #[serde(default)]
    pub skincare_routine: SkincareRoutine,
}

impl UserDocument for HealthDocument {
    const KIND: &'static str = "health";

    type Aggregate = HealthRecord;

    fn into_aggregate(self, meta: DocumentMeta) -> HealthRecord {
        HealthRecord {
            user_id: meta.user_id,
            water_intake: self.water_intake.into_iter().map(WaterIntake::from).collect(),
            acne_status: self.acne_status,
            meal_logs: self.meal_logs,
            skincare_routine: self.skincare_routine,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    fn from_aggregate(record: HealthRecord) -> Self {
        Self {
            water_intake: record
                .water_intake
                .into_iter()
                .map(WaterIntakeRecord::from)
                .collect(),
            acne_status: record.acne_status,
            meal_logs: record.meal_logs,
            skincare_routine: record.skincare_routine,
        }
    }
}
