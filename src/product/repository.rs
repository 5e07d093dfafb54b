use super::model::{Product, seed_products};
use crate::lifecycle::{LifecycleError, OnModuleDestroy, OnModuleInit};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Storage seam for the product directory.
///
/// Every method is one atomic step against the collection. Mutations hand
/// back the whole collection as it stands right after the change.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Vec<Product>;

    /// First product whose id equals `id`
    async fn find_by_id(&self, id: &str) -> Option<Product>;

    async fn find_by_category(&self, category: &str) -> Vec<Product>;

    /// Append without any uniqueness check
    async fn insert(&self, product: Product) -> Vec<Product>;

    /// Remove the first product whose id equals `id`, if any
    async fn delete(&self, id: &str) -> (Option<Product>, Vec<Product>);
}

/// Process-local collection, lost on restart
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    /// Replace the contents with the seed rows
    pub async fn reset(&self) -> usize {
        let mut products = self.products.write().await;
        *products = seed_products();
        products.len()
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

impl crate::di::Injectable for InMemoryProductRepository {
    fn inject(_container: &crate::Container) -> crate::Result<Self> {
        Ok(Self::seeded())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    async fn find_by_id(&self, id: &str) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    async fn find_by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .read()
            .await
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    async fn insert(&self, product: Product) -> Vec<Product> {
        let mut products = self.products.write().await;
        products.push(product);
        products.clone()
    }

    async fn delete(&self, id: &str) -> (Option<Product>, Vec<Product>) {
        let mut products = self.products.write().await;
        let removed = products
            .iter()
            .position(|p| p.id == id)
            .map(|index| products.remove(index));
        (removed, products.clone())
    }
}

#[async_trait]
impl OnModuleInit for InMemoryProductRepository {
    async fn on_module_init(&self) -> Result<(), LifecycleError> {
        let count = self.reset().await;
        tracing::info!(products = count, "product directory seeded");
        Ok(())
    }
}

#[async_trait]
impl OnModuleDestroy for InMemoryProductRepository {
    async fn on_module_destroy(&self) -> Result<(), LifecycleError> {
        let count = self.len().await;
        tracing::info!(products = count, "discarding in-memory product directory");
        Ok(())
    }
}
