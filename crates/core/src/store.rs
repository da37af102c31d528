//! Shared types for the per-user aggregate repositories.

use crate::errors::Result;

/// An in-place change applied to a user's aggregate inside a single storage
/// transaction. Returning an error rolls the whole change back.
pub type DocumentMutation<T> = Box<dyn FnOnce(&mut T) -> Result<()> + Send + 'static>;
