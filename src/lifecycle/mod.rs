//! Lifecycle hooks
//!
//! ```text
//! 1. Configuration loading
//! 2. Container assembly (modules registered)
//! 3. OnModuleInit, registration order      <- hook
//! 4. Server start
//!    [running]
//! 5. Shutdown signal (SIGTERM/SIGINT)
//! 6. OnModuleDestroy, reverse order        <- hook
//! 7. Server stop
//! ```

mod application;
mod error;
mod manager;
mod shutdown;
mod traits;

pub use application::{Application, ApplicationBuilder};
pub use error::{LifecycleError, Result};
pub use manager::LifecycleManager;
pub use shutdown::shutdown_signal;
pub use traits::{OnModuleDestroy, OnModuleInit};
