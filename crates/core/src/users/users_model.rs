//! User profile models.

use std::sync::LazyLock;

use chrono::{NaiveDateTime, Utc};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::health::SkincareRoutine;
use crate::utils::{require_non_negative, require_text};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Profile of a student, keyed by the caller identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub university: String,
    pub dorm_location: String,
    pub allowance: Decimal,
    pub skincare_routine: SkincareRoutine,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserProfile {
    pub email: String,
    pub name: String,
    pub university: String,
    pub dorm_location: String,
    #[serde(default)]
    pub allowance: Option<Decimal>,
    #[serde(default)]
    pub skincare_routine: Option<SkincareRoutine>,
}

impl NewUserProfile {
    pub fn validate(&self) -> Result<()> {
        if !EMAIL_PATTERN.is_match(self.email.trim()) {
            return Err(Error::invalid_input("Please include a valid email"));
        }
        require_text(&self.name, "name")?;
        require_text(&self.university, "university")?;
        require_text(&self.dorm_location, "dormLocation")?;
        if let Some(allowance) = self.allowance {
            require_non_negative(allowance, "allowance")?;
        }
        Ok(())
    }

    pub fn into_profile(self, user_id: &str) -> UserProfile {
        let now = Utc::now().naive_utc();
        UserProfile {
            id: user_id.to_string(),
            email: self.email.trim().to_lowercase(),
            name: self.name.trim().to_string(),
            university: self.university.trim().to_string(),
            dorm_location: self.dorm_location.trim().to_string(),
            allowance: self.allowance.unwrap_or_default(),
            skincare_routine: self.skincare_routine.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial profile update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub dorm_location: Option<String>,
    #[serde(default)]
    pub allowance: Option<Decimal>,
    #[serde(default)]
    pub skincare_routine: Option<SkincareRoutine>,
}

impl UserProfileUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_text(name, "name")?;
        }
        if let Some(university) = &self.university {
            require_text(university, "university")?;
        }
        if let Some(dorm) = &self.dorm_location {
            require_text(dorm, "dormLocation")?;
        }
        if let Some(allowance) = self.allowance {
            require_non_negative(allowance, "allowance")?;
        }
        Ok(())
    }

    pub fn apply_to(self, profile: &mut UserProfile) {
        if let Some(name) = self.name {
            profile.name = name.trim().to_string();
        }
        if let Some(university) = self.university {
            profile.university = university.trim().to_string();
        }
        if let Some(dorm) = self.dorm_location {
            profile.dorm_location = dorm.trim().to_string();
        }
        if let Some(allowance) = self.allowance {
            profile.allowance = allowance;
        }
        if let Some(routine) = self.skincare_routine {
            profile.skincare_routine = routine;
        }
        profile.updated_at = Utc::now().naive_utc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_profile(email: &str) -> NewUserProfile {
        NewUserProfile {
            email: email.to_string(),
            name: "Sari".to_string(),
            university: "UGM".to_string(),
            dorm_location: "Block C".to_string(),
            allowance: None,
            skincare_routine: None,
        }
    }

    #[test]
    fn email_is_normalised() {
        let profile = new_profile("  Sari@Example.COM ");
        profile.validate().unwrap();
        let profile = profile.into_profile("user-1");
        assert_eq!(profile.email, "sari@example.com");
        assert_eq!(profile.allowance, Decimal::ZERO);
        assert_eq!(profile.skincare_routine, SkincareRoutine::default());
    }

    #[test]
    fn malformed_email_is_rejected() {
        assert!(new_profile("not-an-email").validate().is_err());
        assert!(new_profile("a@b").validate().is_err());
    }

    #[test]
    fn update_rejects_blank_name_and_negative_allowance() {
        let update = UserProfileUpdate {
            name: Some("".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = UserProfileUpdate {
            allowance: Some(dec!(-1)),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
