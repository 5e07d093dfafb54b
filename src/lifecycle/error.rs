//! Lifecycle-specific error types

use thiserror::Error;

/// Errors that can occur while running lifecycle hooks
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The application could not be assembled
    #[error("Initialization failed: {0}")]
    InitializationFailed(String),

    /// Init hooks did not finish in time
    #[error("Timeout during {phase}: {message}")]
    Timeout {
        /// The lifecycle phase where the timeout occurred
        phase: String,
        /// Additional error message
        message: String,
    },

    /// A single hook returned an error
    #[error("Hook execution failed for {service}: {message}")]
    HookFailed {
        /// Name the service was registered under
        service: String,
        /// Error message from the hook
        message: String,
    },
}

impl LifecycleError {
    /// Create an initialization failure error
    pub fn init_failed(msg: impl Into<String>) -> Self {
        Self::InitializationFailed(msg.into())
    }

    /// Create a timeout error
    pub fn timeout(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Timeout {
            phase: phase.into(),
            message: message.into(),
        }
    }

    /// Create a hook failure error
    pub fn hook_failed(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::HookFailed {
            service: service.into(),
            message: message.into(),
        }
    }
}

/// A specialized Result type for lifecycle operations
pub type Result<T> = std::result::Result<T, LifecycleError>;
