//! # shopgraph
//!
//! An in-memory product directory served over GraphQL.
//!
//! The directory is a single collection seeded with three products at
//! startup. It is owned by an injectable repository, wrapped by
//! [`product::ProductService`], and exposed through an async-graphql schema
//! mounted on an axum router.
//!
//! ```text
//! client ──HTTP──▶ router (CORS, interceptors)
//!                    │
//!                    ▼
//!              ProductSchema ──▶ ProductService ──▶ dyn ProductRepository
//! ```
//!
//! Services are wired through a small dependency-injection [`Container`]:
//! `#[derive(Injectable)]` builds a struct from its `Arc` fields and
//! `#[module(...)]` groups trait bindings and providers.
//!
//! ```rust,no_run
//! use shopgraph::{app_module::build_application, config::ConfigService, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let (app, config) = build_application(ConfigService::from_env()).await?;
//!     server::serve(app, config).await
//! }
//! ```

// Lets the derive and module macros refer to `::shopgraph` from inside this crate.
extern crate self as shopgraph;

pub mod app_module;
pub mod config;
pub mod di;
pub mod error;
pub mod graphql;
pub mod interceptor;
pub mod lifecycle;
pub mod module;
pub mod product;
pub mod server;

pub use di::{Container, ContainerBuilder, HasContainer, Inject, Injectable};
pub use error::{Result, ShopgraphError};
pub use module::Module;

pub use shopgraph_macro::{Injectable, module};

pub use async_trait::async_trait;
pub use axum;
#[doc(hidden)]
pub use tracing;
