use super::schema::ProductSchema;
use crate::config::ServerConfig;
use crate::di::Inject;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Execute a GraphQL request envelope (query, variables, operation name).
pub async fn graphql_handler(
    Inject(schema): Inject<ProductSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner();
    tracing::debug!(operation = ?request.operation_name, "executing graphql request");

    let response = schema.execute(request).await;
    if response.is_err() {
        tracing::warn!(errors = ?response.errors, "graphql request returned errors");
    }
    response.into()
}

/// GraphiQL explorer pointed at the configured endpoint
pub async fn graphiql(Inject(config): Inject<ServerConfig>) -> Response {
    if !config.graphiql {
        return StatusCode::NOT_FOUND.into_response();
    }
    Html(
        GraphiQLSource::build()
            .endpoint(&config.graphql_path)
            .finish(),
    )
    .into_response()
}
