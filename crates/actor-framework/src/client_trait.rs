//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get` and `list`
//! built on top of a generic `ResourceClient`, with framework errors mapped
//! into the resource's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// pub struct ProductClient {
///     inner: ResourceClient<Product>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Product> for ProductClient {
///     type Error = ProductError;
///
///     fn inner(&self) -> &ResourceClient<Product> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> ProductError {
///         ProductError::ActorCommunicationError(e.to_string())
///     }
/// }
///
/// // get() and list() are now available on ProductClient.
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

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

    /// Fetch every entity, ordered by ID.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
