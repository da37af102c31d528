//! SQLite storage for per-user JSON documents.

mod model;
mod store;

pub use model::{DocumentMeta, NewUserDocumentDB, UserDocument, UserDocumentDB};
pub use store::DocumentStore;
