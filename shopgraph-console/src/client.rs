//! GraphQL client for the product directory.

use crate::error::{ConsoleError, Result};
use crate::form::NewProduct;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

const PRODUCT_FIELDS: &str = "id name price category";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: i32,
}

/// The directory operations the console needs
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<ProductRow>>;

    /// Returns the collection as it stands after the insert
    async fn create_product(&self, product: &NewProduct) -> Result<Vec<ProductRow>>;
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQlEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorItem>,
}

#[derive(Deserialize)]
struct GraphQlErrorItem {
    message: String,
}

pub struct ProductClient {
    endpoint: String,
    http: reqwest::Client,
}

impl ProductClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one operation and unwrap the response envelope.
    ///
    /// Any entry in `errors` fails the call, even when partial data came back.
    pub async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        tracing::debug!(endpoint = %self.endpoint, query, "sending graphql request");

        let envelope: GraphQlEnvelope<T> = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !envelope.errors.is_empty() {
            let messages: Vec<_> = envelope.errors.into_iter().map(|e| e.message).collect();
            return Err(ConsoleError::GraphQl(messages.join("; ")));
        }

        envelope.data.ok_or(ConsoleError::MissingData("operation"))
    }

    pub async fn product_by_id(&self, id: &str) -> Result<Option<ProductRow>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            get_product_by_id: Option<ProductRow>,
        }

        let query = format!(
            "query ProductById($id: ID!) {{ getProductById(id: $id) {{ {PRODUCT_FIELDS} }} }}"
        );
        let data: Data = self.execute(&query, json!({ "id": id })).await?;
        Ok(data.get_product_by_id)
    }

    pub async fn categories(&self) -> Result<Vec<String>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            get_all_categories: Option<Vec<Option<String>>>,
        }

        let data: Data = self
            .execute("query Categories { getAllCategories }", json!({}))
            .await?;
        Ok(flatten(data.get_all_categories))
    }

    pub async fn products_by_category(&self, category: &str) -> Result<Vec<ProductRow>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            get_products_by_category: Option<Vec<Option<ProductRow>>>,
        }

        let query = format!(
            "query ByCategory($category: String!) {{ getProductsByCategory(category: $category) {{ {PRODUCT_FIELDS} }} }}"
        );
        let data: Data = self
            .execute(&query, json!({ "category": category }))
            .await?;
        Ok(flatten(data.get_products_by_category))
    }

    pub async fn delete_product(&self, id: &str) -> Result<Vec<ProductRow>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            delete_product: Option<Vec<Option<ProductRow>>>,
        }

        let query = format!(
            "mutation DeleteProduct($id: ID!) {{ deleteProduct(id: $id) {{ {PRODUCT_FIELDS} }} }}"
        );
        let data: Data = self.execute(&query, json!({ "id": id })).await?;
        Ok(flatten(data.delete_product))
    }
}

#[async_trait]
impl DirectoryApi for ProductClient {
    async fn fetch_products(&self) -> Result<Vec<ProductRow>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            get_all_products: Option<Vec<Option<ProductRow>>>,
        }

        let query = format!("query AllProducts {{ getAllProducts {{ {PRODUCT_FIELDS} }} }}");
        let data: Data = self.execute(&query, json!({})).await?;
        Ok(flatten(data.get_all_products))
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Vec<ProductRow>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            create_product: Option<Vec<Option<ProductRow>>>,
        }

        let query = format!(
            "mutation CreateProduct($id: ID!, $name: String!, $category: String!, $price: Int!) {{ \
             createProduct(id: $id, name: $name, category: $category, price: $price) {{ {PRODUCT_FIELDS} }} }}"
        );
        let variables = serde_json::to_value(product)
            .map_err(|e| ConsoleError::InvalidField {
                field: "product",
                message: e.to_string(),
            })?;
        let data: Data = self.execute(&query, variables).await?;
        Ok(flatten(data.create_product))
    }
}

/// The schema allows null lists and null entries; treat both as absent.
fn flatten<T>(items: Option<Vec<Option<T>>>) -> Vec<T> {
    items.into_iter().flatten().flatten().collect()
}
