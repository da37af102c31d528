//! Database models for user profiles.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use unilife_core::health::SkincareRoutine;
use unilife_core::users::UserProfile;

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::user_profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserProfileDB {
    pub id: String,
    pub email: String,
    pub name: String,
    pub university: String,
    pub dorm_location: String,
    pub allowance: String,
    pub face_wash: bool,
    pub moisturizer: bool,
    pub sunscreen: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<UserProfileDB> for UserProfile {
    fn from(db: UserProfileDB) -> Self {
        let allowance = Decimal::from_str(&db.allowance).unwrap_or_else(|e| {
            log::error!(
                "Failed to parse allowance '{}' for user {}: {}. Falling back to ZERO.",
                db.allowance,
                db.id,
                e
            );
            Decimal::ZERO
        });
        UserProfile {
            id: db.id,
            email: db.email,
            name: db.name,
            university: db.university,
            dorm_location: db.dorm_location,
            allowance,
            skincare_routine: SkincareRoutine {
                face_wash: db.face_wash,
                moisturizer: db.moisturizer,
                sunscreen: db.sunscreen,
            },
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<UserProfile> for UserProfileDB {
    fn from(profile: UserProfile) -> Self {
        UserProfileDB {
            id: profile.id,
            email: profile.email,
            name: profile.name,
            university: profile.university,
            dorm_location: profile.dorm_location,
            allowance: profile.allowance.to_string(),
            face_wash: profile.skincare_routine.face_wash,
            moisturizer: profile.skincare_routine.moisturizer,
            sunscreen: profile.skincare_routine.sunscreen,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
