use async_trait::async_trait;
use std::sync::Arc;

use super::model::HealthDocument;
use crate::db::{DbPool, WriteHandle};
use crate::documents::DocumentStore;
use unilife_core::errors::Result;
use unilife_core::health::{HealthRecord, HealthRepositoryTrait};
use unilife_core::store::DocumentMutation;

pub struct HealthRepository {
    store: DocumentStore,
}

impl HealthRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        HealthRepository {
            store: DocumentStore::new(pool, writer),
        }
    }
}

#[async_trait]
impl HealthRepositoryTrait for HealthRepository {
    async fn get_or_create_health(&self, user_id: &str) -> Result<HealthRecord> {
        self.store.get_or_create::<HealthDocument>(user_id).await
    }

    async fn modify_health(
        &self,
        user_id: &str,
        mutation: DocumentMutation<HealthRecord>,
    ) -> Result<HealthRecord> {
        self.store.modify::<HealthDocument>(user_id, mutation).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;
    use unilife_core::health::{HealthService, HealthServiceTrait, NewWaterIntake};

    async fn create_test_repository() -> (HealthRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path_str = temp_dir.path().join("test.db").to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        (HealthRepository::new(Arc::clone(&pool), writer), temp_dir)
    }

    #[tokio::test]
    async fn water_amounts_read_back_exactly() {
        let (repo, _dir) = create_test_repository().await;
        let service = HealthService::new(Arc::new(repo));

        service
            .add_water_intake("u1", NewWaterIntake { amount: dec!(0.333333333333333333) })
            .await
            .unwrap();

        let record = service.get_health("u1").await.unwrap();
        assert_eq!(record.water_intake.len(), 1);
        assert_eq!(record.water_intake[0].amount, dec!(0.333333333333333333));
    }
}
