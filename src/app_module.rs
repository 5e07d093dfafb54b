use crate::config::{ConfigService, ServerConfig};
use crate::di::ContainerBuilder;
use crate::error::Result;
use crate::graphql::GraphQlModule;
use crate::lifecycle::Application;
use crate::module;
use crate::product::{InMemoryProductRepository, ProductModule};
use std::time::Duration;

/// Root module: the product directory and the schema built on top of it
#[module(imports = [ProductModule, GraphQlModule])]
pub struct AppModule;

const INIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Assemble the container and run init hooks.
///
/// The repository's init hook seeds the directory, so every application
/// built here starts from the same three rows.
pub async fn build_application(config: ConfigService) -> Result<(Application, ServerConfig)> {
    let server_config = ServerConfig::from_config(&config)?;

    let container = ContainerBuilder::new()
        .register(config)
        .register(server_config.clone())
        .module::<AppModule>()?
        .build();

    let repository = container.resolve::<InMemoryProductRepository>()?;

    let app = Application::builder()
        .container(container)
        .register_lifecycle(repository, "ProductRepository")
        .init_timeout(INIT_TIMEOUT)
        .build()
        .await?;

    Ok((app, server_config))
}
