//! HTTP surface: router, CORS policy and the serve loop.

use crate::config::ServerConfig;
use crate::di::{Container, HasContainer};
use crate::graphql::{graphiql, graphql_handler};
use crate::interceptor::{InterceptorLayer, LoggingInterceptor};
use crate::lifecycle::{Application, shutdown_signal};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    container: Arc<Container>,
}

impl AppState {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }
}

impl HasContainer for AppState {
    fn get_container(&self) -> &Container {
        &self.container
    }
}

/// Any origin, credentials allowed. The request origin is echoed back since
/// a literal `*` is not valid alongside credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route(&config.graphql_path, get(graphiql).post(graphql_handler))
        .route("/health", get(health))
        .layer(InterceptorLayer::new(vec![Box::new(LoggingInterceptor)]))
        .layer(cors_layer())
        .with_state(state)
}

/// Bind, serve until a shutdown signal arrives, then run destroy hooks.
pub async fn serve(app: Application, config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new(Arc::clone(app.container()));
    let router = build_router(state, &config);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        tracing::error!(%addr, error = %e, "failed to bind listener");
        e
    })?;

    tracing::info!(
        "🚀 Server ready at http://localhost:{}{}",
        config.port,
        config.graphql_path
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("🛑 Initiating graceful shutdown...");
            if let Err(e) = app.shutdown().await {
                tracing::error!(error = %e, "error during shutdown");
            }
        })
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_module::build_application;
    use crate::config::ConfigService;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use tower::ServiceExt;

    async fn router() -> Router {
        let (app, config) = build_application(ConfigService::new()).await.unwrap();
        build_router(AppState::new(Arc::clone(app.container())), &config)
    }

    async fn post_graphql(router: Router, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/graphql")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_query_over_http() {
        let (status, body) = post_graphql(
            router().await,
            json!({"query": "{ getAllProducts { id name } }"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["getAllProducts"][0]["name"], "Infinix");
    }

    #[tokio::test]
    async fn test_mutation_with_variables_persists_across_requests() {
        let router = router().await;
        let (_, body) = post_graphql(
            router.clone(),
            json!({
                "query": "mutation($id: ID!, $name: String!, $category: String!, $price: Int!) { createProduct(id: $id, name: $name, category: $category, price: $price) { id } }",
                "variables": {"id": "4", "name": "MacBook", "category": "laptop", "price": 1500}
            }),
        )
        .await;
        assert_eq!(body["data"]["createProduct"].as_array().unwrap().len(), 4);

        let (_, body) = post_graphql(
            router,
            json!({"query": "{ getProductById(id: \"4\") { name price } }"}),
        )
        .await;
        assert_eq!(body["data"]["getProductById"], json!({"name": "MacBook", "price": 1500}));
    }

    #[tokio::test]
    async fn test_coercion_error_envelope() {
        let (_, body) = post_graphql(
            router().await,
            json!({
                "query": "mutation($price: Int!) { createProduct(id: \"9\", name: \"a\", category: \"b\", price: $price) { id } }",
                "variables": {"price": "abc"}
            }),
        )
        .await;
        assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin_with_credentials() {
        let response = router()
            .await
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/graphql")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }

    #[tokio::test]
    async fn test_health_and_graphiql() {
        let router = router().await;

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"status": "ok"}));

        let response = router
            .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unresolved_dependency_is_500() {
        let config = ServerConfig::from_config(&ConfigService::new()).unwrap();
        let router = build_router(AppState::new(Arc::new(Container::new())), &config);

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/graphql")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({"query": "{ getAllCategories }"}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("Dependency not found"), "{text}");
    }
}
