use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response};
use std::future::Future;
use std::pin::Pin;

mod layer;
mod logging;

pub use layer::{InterceptorLayer, InterceptorMiddleware};
pub use logging::LoggingInterceptor;

pub type InterceptorResult = Result<Response, InterceptorError>;

/// A type-erased error for interceptors
pub type InterceptorError = Box<dyn std::error::Error + Send + Sync>;

type BoxedHandler =
    Box<dyn FnOnce(Request<Body>) -> Pin<Box<dyn Future<Output = InterceptorResult> + Send>> + Send>;

/// The rest of the chain: later interceptors, then the route itself.
pub struct Next {
    run: BoxedHandler,
}

impl Next {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(Request<Body>) -> Pin<Box<dyn Future<Output = InterceptorResult> + Send>>
            + Send
            + 'static,
    {
        Self { run: Box::new(f) }
    }

    pub async fn run(self, request: Request<Body>) -> InterceptorResult {
        (self.run)(request).await
    }
}

/// Wraps request handling: inspect the request, call [`Next::run`], inspect
/// the response.
///
/// ```ignore
/// struct Timing;
///
/// #[async_trait]
/// impl Interceptor for Timing {
///     async fn intercept(&self, req: Request<Body>, next: Next) -> InterceptorResult {
///         let start = Instant::now();
///         let res = next.run(req).await?;
///         tracing::debug!(elapsed = ?start.elapsed());
///         Ok(res)
///     }
/// }
/// ```
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult;
}
