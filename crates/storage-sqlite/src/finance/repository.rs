use async_trait::async_trait;
use std::sync::Arc;

use super::model::FinanceDocument;
use crate::db::{DbPool, WriteHandle};
use crate::documents::DocumentStore;
use unilife_core::errors::Result;
use unilife_core::finance::{Finance, FinanceRepositoryTrait};
use unilife_core::store::DocumentMutation;

pub struct FinanceRepository {
    store: DocumentStore,
}

impl FinanceRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        FinanceRepository {
            store: DocumentStore::new(pool, writer),
        }
    }
}

#[async_trait]
impl FinanceRepositoryTrait for FinanceRepository {
    fn load_finance(&self, user_id: &str) -> Result<Option<Finance>> {
        self.store.load::<FinanceDocument>(user_id)
    }

    async fn get_or_create_finance(&self, user_id: &str) -> Result<Finance> {
        self.store.get_or_create::<FinanceDocument>(user_id).await
    }

    async fn modify_finance(
        &self,
        user_id: &str,
        mutation: DocumentMutation<Finance>,
    ) -> Result<Finance> {
        self.store.modify::<FinanceDocument>(user_id, mutation).await
    }
}
