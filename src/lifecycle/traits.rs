//! Hook traits for services that take part in startup and shutdown.
//!
//! Hooks receive `&self`: services are shared through the container as
//! `Arc<T>` and keep their own interior mutability.

use super::LifecycleError;
use async_trait::async_trait;

/// Runs once the container is assembled, before the server accepts requests.
#[async_trait]
pub trait OnModuleInit: Send + Sync {
    async fn on_module_init(&self) -> Result<(), LifecycleError>;
}

/// Runs during graceful shutdown, in reverse registration order.
#[async_trait]
pub trait OnModuleDestroy: Send + Sync {
    async fn on_module_destroy(&self) -> Result<(), LifecycleError>;
}
