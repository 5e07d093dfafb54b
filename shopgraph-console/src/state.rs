//! Console state: loading, failed, or the loaded product list.

use crate::client::{DirectoryApi, ProductRow};
use crate::error::Result;
use crate::form::ProductForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleState {
    Loading,
    Failed(String),
    Loaded(Vec<ProductRow>),
}

pub struct ProductConsole<A> {
    api: A,
    state: ConsoleState,
    form: ProductForm,
}

impl<A: DirectoryApi> ProductConsole<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ConsoleState::Loading,
            form: ProductForm::new(),
        }
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    /// Run the list query; a failure is kept as the message to display.
    pub async fn load(&mut self) {
        self.state = match self.api.fetch_products().await {
            Ok(products) => ConsoleState::Loaded(products),
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch products");
                ConsoleState::Failed(e.to_string())
            }
        };
    }

    /// Submit the form through the create mutation.
    ///
    /// On success the list is replaced by the collection the mutation
    /// returned and the form is cleared. On failure the error is logged and
    /// both the list and the form are left as they were.
    pub async fn submit(&mut self) -> Result<()> {
        let outcome = match self.form.to_input() {
            Ok(input) => self.api.create_product(&input).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(products) => {
                tracing::info!(total = products.len(), "product created");
                self.state = ConsoleState::Loaded(products);
                self.form.clear();
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error creating product");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsoleError;
    use crate::form::{FormField, NewProduct};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-process stand-in for the directory service
    struct FakeDirectory {
        products: Mutex<Vec<ProductRow>>,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl FakeDirectory {
        fn seeded() -> Self {
            Self {
                products: Mutex::new(vec![
                    row("1", "Infinix", "mobile", 200),
                    row("2", "Samsung", "mobile", 700),
                    row("3", "Dell", "laptop", 1000),
                ]),
                fail_reads: false,
                fail_writes: false,
            }
        }
    }

    fn row(id: &str, name: &str, category: &str, price: i32) -> ProductRow {
        ProductRow {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
        }
    }

    #[async_trait]
    impl DirectoryApi for FakeDirectory {
        async fn fetch_products(&self) -> Result<Vec<ProductRow>> {
            if self.fail_reads {
                return Err(ConsoleError::GraphQl("connection refused".into()));
            }
            Ok(self.products.lock().unwrap().clone())
        }

        async fn create_product(&self, product: &NewProduct) -> Result<Vec<ProductRow>> {
            if self.fail_writes {
                return Err(ConsoleError::GraphQl("mutation rejected".into()));
            }
            let mut products = self.products.lock().unwrap();
            products.push(row(
                &product.id,
                &product.name,
                &product.category,
                product.price,
            ));
            Ok(products.clone())
        }
    }

    fn fill(form: &mut ProductForm) {
        form.set(FormField::Id, "4");
        form.set(FormField::Name, "MacBook");
        form.set(FormField::Category, "laptop");
        form.set(FormField::Price, "1500");
    }

    #[tokio::test]
    async fn test_load_success() {
        let mut console = ProductConsole::new(FakeDirectory::seeded());
        assert_eq!(console.state(), &ConsoleState::Loading);

        console.load().await;
        assert!(matches!(console.state(), ConsoleState::Loaded(p) if p.len() == 3));
    }

    #[tokio::test]
    async fn test_load_failure_keeps_message() {
        let mut api = FakeDirectory::seeded();
        api.fail_reads = true;
        let mut console = ProductConsole::new(api);

        console.load().await;
        assert_eq!(
            console.state(),
            &ConsoleState::Failed("connection refused".into())
        );
    }

    #[tokio::test]
    async fn test_submit_updates_list_in_place() {
        let mut console = ProductConsole::new(FakeDirectory::seeded());
        console.load().await;
        fill(console.form_mut());

        console.submit().await.unwrap();

        match console.state() {
            ConsoleState::Loaded(products) => {
                assert_eq!(products.len(), 4);
                assert_eq!(products[3], row("4", "MacBook", "laptop", 1500));
            }
            other => panic!("unexpected state {other:?}"),
        }
        assert!(console.form().is_empty());
    }

    #[tokio::test]
    async fn test_failed_submit_leaves_state_alone() {
        let mut api = FakeDirectory::seeded();
        api.fail_writes = true;
        let mut console = ProductConsole::new(api);
        console.load().await;
        let before = console.state().clone();
        fill(console.form_mut());

        assert!(console.submit().await.is_err());
        assert_eq!(console.state(), &before);
        assert_eq!(console.form().get(FormField::Name), "MacBook");
    }

    #[tokio::test]
    async fn test_incomplete_form_is_not_sent() {
        let mut console = ProductConsole::new(FakeDirectory::seeded());
        console.load().await;
        console.form_mut().set(FormField::Id, "4");

        let err = console.submit().await.unwrap_err();
        assert!(matches!(err, ConsoleError::MissingField { field: "name" }));
        assert!(matches!(console.state(), ConsoleState::Loaded(p) if p.len() == 3));
    }
}
