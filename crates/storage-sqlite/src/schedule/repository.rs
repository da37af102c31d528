use async_trait::async_trait;
use std::sync::Arc;

use super::model::ScheduleDocument;
use crate::db::{DbPool, WriteHandle};
use crate::documents::DocumentStore;
use unilife_core::errors::Result;
use unilife_core::schedule::{Schedule, ScheduleRepositoryTrait};
use unilife_core::store::DocumentMutation;

pub struct ScheduleRepository {
    store: DocumentStore,
}

impl ScheduleRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ScheduleRepository {
            store: DocumentStore::new(pool, writer),
        }
    }
}

#[async_trait]
impl ScheduleRepositoryTrait for ScheduleRepository {
    fn load_schedule(&self, user_id: &str) -> Result<Option<Schedule>> {
        self.store.load::<ScheduleDocument>(user_id)
    }

    async fn get_or_create_schedule(&self, user_id: &str) -> Result<Schedule> {
        self.store.get_or_create::<ScheduleDocument>(user_id).await
    }

    async fn modify_schedule(
        &self,
        user_id: &str,
        mutation: DocumentMutation<Schedule>,
    ) -> Result<Schedule> {
        self.store.modify::<ScheduleDocument>(user_id, mutation).await
    }
}
