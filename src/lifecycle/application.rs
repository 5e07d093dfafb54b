//! Application bootstrap: container plus lifecycle hooks.

use super::{LifecycleError, LifecycleManager, OnModuleDestroy, OnModuleInit, Result};
use crate::di::Container;
use std::sync::Arc;
use std::time::Duration;

/// An assembled application whose init hooks have completed.
///
/// ```rust,ignore
/// let app = Application::builder()
///     .container(container)
///     .register_lifecycle(repository, "ProductRepository")
///     .init_timeout(Duration::from_secs(30))
///     .build()
///     .await?;
///
/// // serve ...
///
/// app.shutdown().await?;
/// ```
pub struct Application {
    container: Arc<Container>,
    lifecycle_manager: Arc<LifecycleManager>,
}

impl Application {
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    /// Run OnModuleDestroy hooks.
    pub async fn shutdown(&self) -> Result<()> {
        tracing::info!("Shutting down application...");
        self.lifecycle_manager.call_module_destroy().await?;
        tracing::info!("Application shutdown complete");
        Ok(())
    }
}

#[derive(Default)]
pub struct ApplicationBuilder {
    container: Option<Container>,
    lifecycle_manager: LifecycleManager,
    init_timeout: Option<Duration>,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    /// Bound the total time spent in OnModuleInit hooks
    pub fn init_timeout(mut self, timeout: Duration) -> Self {
        self.init_timeout = Some(timeout);
        self
    }

    pub fn on_init<T>(mut self, service: Arc<T>, name: impl Into<String>) -> Self
    where
        T: OnModuleInit + 'static,
    {
        self.lifecycle_manager.register_init(service, name);
        self
    }

    pub fn on_destroy<T>(mut self, service: Arc<T>, name: impl Into<String>) -> Self
    where
        T: OnModuleDestroy + 'static,
    {
        self.lifecycle_manager.register_destroy(service, name);
        self
    }

    /// Register a service for both init and destroy hooks
    pub fn register_lifecycle<T>(self, service: Arc<T>, name: impl Into<String>) -> Self
    where
        T: OnModuleInit + OnModuleDestroy + 'static,
    {
        let name = name.into();
        self.on_init(Arc::clone(&service), name.clone())
            .on_destroy(service, name)
    }

    /// Run every OnModuleInit hook and return the ready application.
    ///
    /// # Errors
    ///
    /// Fails when no container was supplied, a hook fails, or the init
    /// timeout elapses.
    pub async fn build(self) -> Result<Application> {
        let container = self
            .container
            .ok_or_else(|| LifecycleError::init_failed("Container not provided"))?;

        tracing::info!("Starting application initialization...");

        match self.init_timeout {
            Some(timeout) => {
                self.lifecycle_manager
                    .call_module_init_with_timeout(timeout)
                    .await?
            }
            None => self.lifecycle_manager.call_module_init().await?,
        }

        tracing::info!("Application initialization complete");

        Ok(Application {
            container: Arc::new(container),
            lifecycle_manager: Arc::new(self.lifecycle_manager),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Slow;

    #[async_trait]
    impl OnModuleInit for Slow {
        async fn on_module_init(&self) -> Result<()> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_build_requires_container() {
        let err = Application::builder().build().await.err().unwrap();
        assert!(matches!(err, LifecycleError::InitializationFailed(_)));
    }

    #[tokio::test]
    async fn test_init_timeout() {
        let err = Application::builder()
            .container(Container::new())
            .on_init(Arc::new(Slow), "Slow")
            .init_timeout(Duration::from_millis(10))
            .build()
            .await
            .err()
            .unwrap();
        assert!(matches!(err, LifecycleError::Timeout { .. }));
    }
}
