use crate::di::Container;
use crate::error::Result;

/// A group of bindings and providers registered together.
///
/// Implemented by the `#[module(...)]` attribute.
pub trait Module {
    fn register(container: &mut Container) -> Result<()>;
}
