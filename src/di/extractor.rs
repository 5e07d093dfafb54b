//! Axum integration for the container.

use crate::di::Container;
use crate::error::ShopgraphError;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

/// Axum extractor that resolves a service from the application's container.
///
/// A missing registration rejects the request with a 500 through
/// [`ShopgraphError`]'s `IntoResponse`.
///
/// # Example
/// ```ignore
/// async fn graphql(Inject(schema): Inject<ProductSchema>, req: GraphQLRequest) -> GraphQLResponse {
///     schema.execute(req.into_inner()).await.into()
/// }
/// ```
pub struct Inject<T>(pub Arc<T>);

/// Trait that router state must implement to provide the DI container
pub trait HasContainer {
    fn get_container(&self) -> &Container;
}

impl<S, T> FromRequestParts<S> for Inject<T>
where
    S: Send + Sync + HasContainer,
    T: 'static + Send + Sync,
{
    type Rejection = ShopgraphError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        state.get_container().resolve::<T>().map(Inject)
    }
}

/// Deref to the resolved service
impl<T> std::ops::Deref for Inject<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Cloning shares the same `Arc`
impl<T> Clone for Inject<T> {
    fn clone(&self) -> Self {
        Inject(Arc::clone(&self.0))
    }
}
