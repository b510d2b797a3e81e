//! Generic access contract for a remote entity type.

use crate::error::ApiError;

/// Typed read access to one kind of remote entity.
///
/// Each method issues exactly one request.
#[allow(async_fn_in_trait)]
pub trait Resource<T> {
    /// Fetch the entity with `id`. Fails with `ApiError::NotFound` when the
    /// service reports it absent.
    async fn get(&self, id: u64) -> Result<T, ApiError>;

    /// Fetch one page of entities. `page` is sent to the service as-is.
    async fn list(&self, page: u32) -> Result<Vec<T>, ApiError>;

    /// Like `get`, but an absent entity yields `Ok(None)`.
    async fn optional(&self, id: u64) -> Result<Option<T>, ApiError> {
        match self.get(id).await {
            Ok(entity) => Ok(Some(entity)),
            Err(ApiError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
