pub mod handler;
pub mod schema;

pub use handler::{graphiql, graphql_handler};
pub use schema::{MutationRoot, ProductObject, ProductSchema, QueryRoot, build_schema, export_sdl};

use crate::module;

#[module(providers = [ProductSchema])]
pub struct GraphQlModule;
