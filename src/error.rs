//! Crate-wide error type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShopgraphError>;

/// Failures while wiring or configuring the application
#[derive(Debug, Error)]
pub enum ShopgraphError {
    /// Nothing is registered for the requested type
    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    /// A registration exists but holds a different type
    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    /// A configuration key is present but unusable
    #[error("Invalid configuration value for {key}: {message}")]
    Config { key: String, message: String },

    #[error(transparent)]
    Lifecycle(#[from] crate::lifecycle::LifecycleError),
}

impl ShopgraphError {
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Every variant is a server-side fault, so handlers that fail this way
/// answer 500 with the error text.
impl IntoResponse for ShopgraphError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
