use crate::module;

pub mod model;
pub mod repository;
pub mod service;

pub use model::{Product, seed_products};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;

#[module(
    bindings = [(dyn ProductRepository => InMemoryProductRepository)],
    providers = [InMemoryProductRepository, ProductService],
)]
pub struct ProductModule;
