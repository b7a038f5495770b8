//! # ActorClient Trait
//!
//! Shared `get`, `list` and `delete` for the resource-specific clients, built on the
//! generic `ResourceClient`.
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard CRUD operations.
///
/// Implementors supply the inner `ResourceClient` and a mapping from framework errors
/// to their own error enum; the read/delete operations come for free.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Category> for CategoryClient {
///     type Error = CategoryError;
///     fn inner(&self) -> &ResourceClient<Category> { &self.inner }
///     fn map_error(e: FrameworkError) -> Self::Error { CategoryError::from_framework(e) }
/// }
///
/// let all = category_client.list().await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, oldest first.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
