//! The product directory schema.
//!
//! Lists are nullable lists of nullable products to match the published
//! contract (`[Product]`), even though resolvers never produce null entries.

use crate::di::{Container, Injectable};
use crate::product::{Product, ProductService};
use async_graphql::{Context, EmptySubscription, ID, Object, Schema};
use std::sync::Arc;

pub type ProductSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// GraphQL view of a [`Product`]
pub struct ProductObject(Product);

#[Object(name = "Product")]
impl ProductObject {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn category(&self) -> &str {
        &self.0.category
    }

    async fn price(&self) -> i32 {
        self.0.price
    }
}

fn nullable_list<T, U>(items: Vec<T>, wrap: impl Fn(T) -> U) -> Option<Vec<Option<U>>> {
    Some(items.into_iter().map(|item| Some(wrap(item))).collect())
}

fn products(items: Vec<Product>) -> Option<Vec<Option<ProductObject>>> {
    nullable_list(items, ProductObject)
}

fn service<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<ProductService>> {
    ctx.data::<Arc<ProductService>>()
}

#[derive(Clone, Copy, Debug, Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Every product, in insertion order.
    async fn get_all_products(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<ProductObject>>>> {
        Ok(products(service(ctx)?.all_products().await))
    }

    /// Distinct categories in first-occurrence order.
    async fn get_all_categories(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<String>>>> {
        Ok(nullable_list(service(ctx)?.all_categories().await, |c| c))
    }

    /// First product with this id, or null when none matches.
    async fn get_product_by_id(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<ProductObject>> {
        Ok(service(ctx)?.product_by_id(&id).await.map(ProductObject))
    }

    /// Products whose category equals the argument exactly.
    async fn get_products_by_category(
        &self,
        ctx: &Context<'_>,
        category: String,
    ) -> async_graphql::Result<Option<Vec<Option<ProductObject>>>> {
        Ok(products(service(ctx)?.products_by_category(&category).await))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Append a product (ids are not checked for uniqueness) and return the
    /// whole collection.
    async fn create_product(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        category: String,
        price: i32,
    ) -> async_graphql::Result<Option<Vec<Option<ProductObject>>>> {
        let product = Product {
            id: id.0,
            name,
            category,
            price,
        };
        Ok(products(service(ctx)?.create_product(product).await))
    }

    /// Remove the first product with this id, if any, and return the whole
    /// collection. Unknown ids are a no-op.
    async fn delete_product(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Vec<Option<ProductObject>>>> {
        Ok(products(service(ctx)?.delete_product(&id).await))
    }
}

pub fn build_schema(service: Arc<ProductService>) -> ProductSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

/// Schema definition language for the directory
pub fn export_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

impl Injectable for ProductSchema {
    fn inject(container: &Container) -> crate::Result<Self> {
        Ok(build_schema(container.resolve::<ProductService>()?))
    }
}
