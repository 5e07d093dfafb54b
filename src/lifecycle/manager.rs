use super::{LifecycleError, OnModuleDestroy, OnModuleInit, Result};
use std::sync::Arc;
use std::time::Duration;

struct LifecycleHook<T: ?Sized> {
    service: Arc<T>,
    name: String,
}

/// Ordered registry of lifecycle hooks.
///
/// Init hooks run in registration order and stop at the first failure.
/// Destroy hooks run in reverse order; a failing hook is logged and the
/// remaining hooks still run.
#[derive(Default)]
pub struct LifecycleManager {
    on_init_hooks: Vec<LifecycleHook<dyn OnModuleInit>>,
    on_destroy_hooks: Vec<LifecycleHook<dyn OnModuleDestroy>>,
}

impl LifecycleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_init<T>(&mut self, service: Arc<T>, name: impl Into<String>)
    where
        T: OnModuleInit + 'static,
    {
        let service: Arc<dyn OnModuleInit> = service;
        self.on_init_hooks.push(LifecycleHook {
            service,
            name: name.into(),
        });
    }

    pub fn register_destroy<T>(&mut self, service: Arc<T>, name: impl Into<String>)
    where
        T: OnModuleDestroy + 'static,
    {
        let service: Arc<dyn OnModuleDestroy> = service;
        self.on_destroy_hooks.push(LifecycleHook {
            service,
            name: name.into(),
        });
    }

    pub async fn call_module_init(&self) -> Result<()> {
        tracing::info!("Calling OnModuleInit hooks...");

        for hook in &self.on_init_hooks {
            tracing::debug!(service = %hook.name, "initializing");
            hook.service.on_module_init().await.map_err(|e| {
                tracing::error!(service = %hook.name, error = %e, "OnModuleInit failed");
                LifecycleError::hook_failed(&hook.name, e.to_string())
            })?;
        }

        tracing::info!(
            hooks = self.on_init_hooks.len(),
            "OnModuleInit complete"
        );
        Ok(())
    }

    pub async fn call_module_init_with_timeout(&self, timeout: Duration) -> Result<()> {
        tokio::time::timeout(timeout, self.call_module_init())
            .await
            .map_err(|_| {
                LifecycleError::timeout("OnModuleInit", format!("Timeout after {:?}", timeout))
            })?
    }

    pub async fn call_module_destroy(&self) -> Result<()> {
        tracing::info!("Calling OnModuleDestroy hooks...");

        for hook in self.on_destroy_hooks.iter().rev() {
            tracing::debug!(service = %hook.name, "destroying");
            if let Err(e) = hook.service.on_module_destroy().await {
                tracing::error!(service = %hook.name, error = %e, "OnModuleDestroy failed");
            }
        }

        tracing::info!(
            hooks = self.on_destroy_hooks.len(),
            "OnModuleDestroy complete"
        );
        Ok(())
    }

    pub fn init_hook_count(&self) -> usize {
        self.on_init_hooks.len()
    }

    pub fn destroy_hook_count(&self) -> usize {
        self.on_destroy_hooks.len()
    }
}
