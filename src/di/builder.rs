use crate::di::Container;
use crate::error::Result;
use crate::module::Module;

/// Builder for assembling a [`Container`] before it is shared with handlers.
///
/// # Example
/// ```ignore
/// let container = ContainerBuilder::new()
///     .register(ConfigService::from_env())
///     .module::<ProductModule>()?
///     .build();
/// ```
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self {
            container: Container::new(),
        }
    }

    /// Register a ready-made instance
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.register(instance);
        self
    }

    /// Register every binding and provider declared by a module
    pub fn module<M: Module>(mut self) -> Result<Self> {
        M::register(&mut self.container)?;
        Ok(self)
    }

    pub fn build(self) -> Container {
        self.container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
