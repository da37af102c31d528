//! Database models for per-user documents.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Row of `user_documents`: one JSON document per user and kind.
#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::user_documents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDocumentDB {
    pub user_id: String,
    pub kind: String,
    pub document: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::user_documents)]
pub struct NewUserDocumentDB {
    pub user_id: String,
    pub kind: String,
    pub document: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Row metadata handed to a document when it is turned into its aggregate.
#[derive(Debug, Clone)]
pub struct DocumentMeta {
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A JSON payload stored in `user_documents` under a fixed kind.
///
/// `Default` is the value a user starts with before their first write.
pub trait UserDocument: Serialize + DeserializeOwned + Default + Send + 'static {
    const KIND: &'static str;

    type Aggregate: Send + 'static;

    fn into_aggregate(self, meta: DocumentMeta) -> Self::Aggregate;

    fn from_aggregate(aggregate: Self::Aggregate) -> Self;
}
