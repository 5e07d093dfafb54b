use super::model::{Product, distinct_categories};
use super::repository::ProductRepository;
use crate::Injectable;
use std::sync::Arc;

/// Directory operations behind the GraphQL resolvers.
///
/// Not found is never an error: lookups return `None`, deletes of unknown
/// ids leave the collection untouched.
#[derive(Injectable)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn all_products(&self) -> Vec<Product> {
        self.repository.find_all().await
    }

    pub async fn product_by_id(&self, id: &str) -> Option<Product> {
        self.repository.find_by_id(id).await
    }

    pub async fn all_categories(&self) -> Vec<String> {
        distinct_categories(&self.repository.find_all().await)
    }

    pub async fn products_by_category(&self, category: &str) -> Vec<Product> {
        self.repository.find_by_category(category).await
    }

    pub async fn create_product(&self, product: Product) -> Vec<Product> {
        let id = product.id.clone();
        let products = self.repository.insert(product).await;
        tracing::info!(%id, total = products.len(), "product created");
        products
    }

    pub async fn delete_product(&self, id: &str) -> Vec<Product> {
        let (removed, products) = self.repository.delete(id).await;
        match removed {
            Some(product) => {
                tracing::info!(id, name = %product.name, total = products.len(), "product deleted")
            }
            None => tracing::debug!(id, "delete matched no product"),
        }
        products
    }
}
