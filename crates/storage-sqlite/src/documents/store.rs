use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::{DocumentMeta, NewUserDocumentDB, UserDocument, UserDocumentDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::user_documents;
use unilife_core::errors::Result;
use unilife_core::store::DocumentMutation;

/// Key-value access to `user_documents`, shared by the aggregate repositories.
///
/// Reads use the pool; every write runs on the writer actor so that
/// create-if-missing, mutate and save happen in one transaction.
#[derive(Clone)]
pub struct DocumentStore {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DocumentStore {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    pub fn load<D: UserDocument>(&self, user_id: &str) -> Result<Option<D::Aggregate>> {
        let mut conn = get_connection(&self.pool)?;
        let row = user_documents::table
            .filter(user_documents::user_id.eq(user_id))
            .filter(user_documents::kind.eq(D::KIND))
            .select(UserDocumentDB::as_select())
            .first::<UserDocumentDB>(&mut conn)
            .optional()
            .into_core()?;
        row.map(decode::<D>).transpose()
    }

    pub async fn get_or_create<D: UserDocument>(&self, user_id: &str) -> Result<D::Aggregate> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<D::Aggregate> {
                decode::<D>(ensure_row::<D>(conn, &user_id)?)
            })
            .await
    }

    pub async fn modify<D: UserDocument>(
        &self,
        user_id: &str,
        mutation: DocumentMutation<D::Aggregate>,
    ) -> Result<D::Aggregate> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<D::Aggregate> {
                let mut aggregate = decode::<D>(ensure_row::<D>(conn, &user_id)?)?;
                mutation(&mut aggregate)?;

                let document = serde_json::to_string(&D::from_aggregate(aggregate))
                    .map_err(StorageError::from)?;
                let saved = diesel::update(
                    user_documents::table
                        .filter(user_documents::user_id.eq(&user_id))
                        .filter(user_documents::kind.eq(D::KIND)),
                )
                .set((
                    user_documents::document.eq(document),
                    user_documents::updated_at.eq(Utc::now().naive_utc()),
                ))
                .returning(UserDocumentDB::as_returning())
                .get_result(conn)
                .into_core()?;

                decode::<D>(saved)
            })
            .await
    }
}

/// Inserts the default document unless one exists, then reads the row back.
/// Must run inside the writer's transaction.
fn ensure_row<D: UserDocument>(conn: &mut SqliteConnection, user_id: &str) -> Result<UserDocumentDB> {
    let now = Utc::now().naive_utc();
    let new_row = NewUserDocumentDB {
        user_id: user_id.to_string(),
        kind: D::KIND.to_string(),
        document: serde_json::to_string(&D::default()).map_err(StorageError::from)?,
        created_at: now,
        updated_at: now,
    };

    let inserted = diesel::insert_into(user_documents::table)
        .values(&new_row)
        .on_conflict((user_documents::user_id, user_documents::kind))
        .do_nothing()
        .execute(conn)
        .into_core()?;
    if inserted > 0 {
        log::debug!("Created {} document for user {}", D::KIND, user_id);
    }

    user_documents::table
        .filter(user_documents::user_id.eq(user_id))
        .filter(user_documents::kind.eq(D::KIND))
        .select(UserDocumentDB::as_select())
        .first::<UserDocumentDB>(conn)
        .into_core()
}

fn decode<D: UserDocument>(row: UserDocumentDB) -> Result<D::Aggregate> {
    let document: D = serde_json::from_str(&row.document).map_err(|e| {
        log::error!(
            "Stored {} document for user {} is unreadable: {}",
            row.kind,
            row.user_id,
            e
        );
        StorageError::from(e)
    })?;
    Ok(document.into_aggregate(DocumentMeta {
        user_id: row.user_id,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
