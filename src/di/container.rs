use crate::error::{Result, ShopgraphError};
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

type AnyArc = Arc<dyn Any + Send + Sync>;

/// Turns the stored `Arc<Impl>` into an `Arc<Arc<dyn Trait>>` erased as `Any`.
/// Returns `None` when the stored instance is not the bound implementation.
type CasterFn = Arc<dyn Fn(AnyArc) -> Option<AnyArc> + Send + Sync>;

/// Thread-safe registry of shared service instances keyed by type.
///
/// Cloning a container is cheap in the sense that instances are shared: both
/// copies hand out the same `Arc`s.
#[derive(Clone, Default)]
pub struct Container {
    services: DashMap<TypeId, AnyArc>,
    trait_mappings: DashMap<TypeId, TypeId>,
    casters: DashMap<TypeId, CasterFn>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        self.register_arc(Arc::new(instance))
    }

    pub fn register_arc<T: 'static + Send + Sync>(&mut self, instance: Arc<T>) -> &mut Self {
        self.services.insert(TypeId::of::<T>(), instance);
        self
    }

    pub fn register_trait<Trait, Impl, F>(&mut self, caster_fn: F) -> &mut Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        let trait_id = TypeId::of::<Trait>();
        self.trait_mappings.insert(trait_id, TypeId::of::<Impl>());

        let caster: CasterFn = Arc::new(move |instance: AnyArc| {
            let concrete = instance.downcast::<Impl>().ok()?;
            let trait_obj: Arc<Trait> = caster_fn(concrete);
            Some(Arc::new(trait_obj) as AnyArc)
        });
        self.casters.insert(trait_id, caster);
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let instance = self
            .services
            .get(&TypeId::of::<T>())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| not_found::<T>())?;

        instance
            .downcast::<T>()
            .map_err(|_| ShopgraphError::DowncastFailed {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let trait_id = TypeId::of::<T>();

        let caster = self
            .casters
            .get(&trait_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| not_found::<T>())?;

        let impl_id = self
            .trait_mappings
            .get(&trait_id)
            .map(|entry| *entry.value())
            .ok_or_else(|| not_found::<T>())?;

        let instance = self
            .services
            .get(&impl_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ShopgraphError::DependencyNotFound {
                type_name: format!(
                    "implementation bound to '{}' is not registered",
                    std::any::type_name::<T>()
                ),
            })?;

        // The caster yields an `Arc<Arc<T>>` erased as `Any`.
        (caster.as_ref())(instance)
            .and_then(|erased| erased.downcast::<Arc<T>>().ok())
            .map(|wrapper| wrapper.as_ref().clone())
            .ok_or_else(|| ShopgraphError::DowncastFailed {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.services.contains_key(&type_id) || self.trait_mappings.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

fn not_found<T: ?Sized>() -> ShopgraphError {
    ShopgraphError::DependencyNotFound {
        type_name: std::any::type_name::<T>().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        value: i32,
    }

    trait Shelf: Send + Sync {
        fn size(&self) -> usize;
    }

    struct VecShelf {
        items: Vec<&'static str>,
    }

    impl Shelf for VecShelf {
        fn size(&self) -> usize {
            self.items.len()
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut container = Container::new();
        container.register(Counter { value: 42 });
        let counter = container.resolve::<Counter>().unwrap();
        assert_eq!(counter.value, 42);
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_resolve_returns_shared_instance() {
        let mut container = Container::new();
        let shared = Arc::new(Counter { value: 7 });
        container.register_arc(Arc::clone(&shared));
        let resolved = container.resolve::<Counter>().unwrap();
        assert!(Arc::ptr_eq(&shared, &resolved));
    }

    #[test]
    fn test_register_and_resolve_trait() {
        let mut container = Container::new();
        container.register(VecShelf {
            items: vec!["a", "b"],
        });
        container.register_trait::<dyn Shelf, VecShelf, _>(|i| i as Arc<dyn Shelf>);
        let shelf = container.resolve_trait::<dyn Shelf>().unwrap();
        assert_eq!(shelf.size(), 2);
        assert!(container.contains::<dyn Shelf>());
    }

    #[test]
    fn test_missing_dependency() {
        let container = Container::new();
        let err = container.resolve::<Counter>().err().unwrap();
        assert!(matches!(err, ShopgraphError::DependencyNotFound { .. }));
    }

    #[test]
    fn test_binding_without_implementation() {
        let mut container = Container::new();
        container.register_trait::<dyn Shelf, VecShelf, _>(|i| i as Arc<dyn Shelf>);
        let err = container.resolve_trait::<dyn Shelf>().err().unwrap();
        assert!(err.to_string().contains("is not registered"));
    }
}
