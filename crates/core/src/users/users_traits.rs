use async_trait::async_trait;

use super::users_model::{NewUserProfile, UserProfile, UserProfileUpdate};
use crate::errors::Result;

/// Persistence contract for user profiles.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>>;

    /// Inserts a new profile. Fails with a unique violation if one already exists.
    async fn create_profile(&self, profile: UserProfile) -> Result<UserProfile>;

    /// Replaces a stored profile with `profile`.
    async fn update_profile(&self, profile: UserProfile) -> Result<UserProfile>;
}

#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_profile(&self, user_id: &str) -> Result<UserProfile>;
    async fn create_profile(&self, user_id: &str, new_profile: NewUserProfile)
        -> Result<UserProfile>;
    async fn update_profile(
        &self,
        user_id: &str,
        update: UserProfileUpdate,
    ) -> Result<UserProfile>;
}
