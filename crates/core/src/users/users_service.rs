use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::users_model::{NewUserProfile, UserProfile, UserProfileUpdate};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result};

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn require_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.repository
            .get_profile(user_id)?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.require_profile(user_id)
    }

    async fn create_profile(
        &self,
        user_id: &str,
        new_profile: NewUserProfile,
    ) -> Result<UserProfile> {
        new_profile.validate()?;
        if self.repository.get_profile(user_id)?.is_some() {
            return Err(Error::ConstraintViolation(
                "A profile already exists for this user".to_string(),
            ));
        }
        info!("Creating profile for user {}", user_id);
        self.repository
            .create_profile(new_profile.into_profile(user_id))
            .await
    }

    async fn update_profile(
        &self,
        user_id: &str,
        update: UserProfileUpdate,
    ) -> Result<UserProfile> {
        update.validate()?;
        let mut profile = self.require_profile(user_id)?;
        update.apply_to(&mut profile);
        self.repository.update_profile(profile).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryUserRepository {
        profiles: Mutex<HashMap<String, UserProfile>>,
    }

    #[async_trait]
    impl UserRepositoryTrait for InMemoryUserRepository {
        fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
            Ok(self.profiles.lock().unwrap().get(user_id).cloned())
        }

        async fn create_profile(&self, profile: UserProfile) -> Result<UserProfile> {
            self.profiles
                .lock()
                .unwrap()
                .insert(profile.id.clone(), profile.clone());
            Ok(profile)
        }

        async fn update_profile(&self, profile: UserProfile) -> Result<UserProfile> {
            self.create_profile(profile).await
        }
    }

    fn new_profile() -> NewUserProfile {
        NewUserProfile {
            email: "budi@kampus.ac.id".to_string(),
            name: "Budi".to_string(),
            university: "ITB".to_string(),
            dorm_location: "Asrama Kidang".to_string(),
            allowance: Some(dec!(1500000)),
            skincare_routine: None,
        }
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::default()));
        assert!(matches!(service.get_profile("nobody"), Err(Error::NotFound(_))));
        assert!(matches!(
            service
                .update_profile("nobody", UserProfileUpdate::default())
                .await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn profile_can_only_be_created_once() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::default()));
        service.create_profile("u1", new_profile()).await.unwrap();
        let err = service.create_profile("u1", new_profile()).await.unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::default()));
        service.create_profile("u1", new_profile()).await.unwrap();

        let updated = service
            .update_profile(
                "u1",
                UserProfileUpdate {
                    dorm_location: Some("Asrama Bumi Ganesha".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.dorm_location, "Asrama Bumi Ganesha");
        assert_eq!(updated.name, "Budi");
        assert_eq!(updated.allowance, dec!(1500000));
    }
}
