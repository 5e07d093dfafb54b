use proc_macro::TokenStream;

mod injectable;
mod module;

/// Derive macro for making a struct resolvable from the DI container
///
/// Every field must be an `Arc<T>` or `Arc<dyn Trait>`. Concrete types are
/// resolved with `Container::resolve`, trait objects with
/// `Container::resolve_trait`.
///
/// # Example
/// ```ignore
/// use shopgraph::Injectable;
///
/// #[derive(Injectable)]
/// pub struct ProductService {
///     repository: Arc<dyn ProductRepository>,
/// }
/// ```
#[proc_macro_derive(Injectable)]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    injectable::derive_injectable(input)
}

/// Attribute macro for declaring a module: trait bindings, imported modules
/// and providers, registered into a container in that order.
///
/// # Example
/// ```ignore
/// use shopgraph::module;
///
/// #[module(
///     bindings = [(dyn ProductRepository => InMemoryProductRepository)],
///     providers = [InMemoryProductRepository, ProductService],
/// )]
/// pub struct ProductModule;
/// ```
#[proc_macro_attribute]
pub fn module(attr: TokenStream, item: TokenStream) -> TokenStream {
    module::module_attribute(attr, item)
}
