use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: i32,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
        }
    }
}

/// Rows the directory holds at startup and after every reset
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("1", "Infinix", "mobile", 200),
        Product::new("2", "Samsung", "mobile", 700),
        Product::new("3", "Dell", "laptop", 1000),
    ]
}

/// Distinct categories in first-occurrence order, compared exactly.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if !categories.iter().any(|c| *c == product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}
