use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::UserProfileDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::user_profiles;
use unilife_core::errors::Result;
use unilife_core::users::{UserProfile, UserRepositoryTrait};

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let mut conn = get_connection(&self.pool)?;
        let profile = user_profiles::table
            .find(user_id)
            .select(UserProfileDB::as_select())
            .first::<UserProfileDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(profile.map(UserProfile::from))
    }

    async fn create_profile(&self, profile: UserProfile) -> Result<UserProfile> {
        let profile_db = UserProfileDB::from(profile);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<UserProfile> {
                let saved = diesel::insert_into(user_profiles::table)
                    .values(&profile_db)
                    .returning(UserProfileDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(UserProfile::from(saved))
            })
            .await
    }

    async fn update_profile(&self, profile: UserProfile) -> Result<UserProfile> {
        let profile_db = UserProfileDB::from(profile);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<UserProfile> {
                let saved = diesel::update(user_profiles::table.find(profile_db.id.clone()))
                    .set(&profile_db)
                    .returning(UserProfileDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(UserProfile::from(saved))
            })
            .await
    }
}
