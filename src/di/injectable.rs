use crate::di::Container;
use crate::error::Result;

/// Types that can build themselves from services already in the [`Container`].
///
/// Usually derived with `#[derive(Injectable)]`; hand-written for providers
/// that own state rather than dependencies.
pub trait Injectable: Sized + Send + Sync + 'static {
    /// # Errors
    /// Returns an error if any required dependency is not registered.
    fn inject(container: &Container) -> Result<Self>;
}
