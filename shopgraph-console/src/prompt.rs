//! Line-oriented form loop for `interactive`.

use crate::client::DirectoryApi;
use crate::form::{FormField, ProductForm};
use crate::render::render_state;
use crate::state::ProductConsole;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Render the directory, then read products until the user quits.
///
/// A blank ID ends the loop, as does the end of input.
pub async fn run<A, R, W>(console: &mut ProductConsole<A>, input: R, out: &mut W) -> io::Result<()>
where
    A: DirectoryApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", render_state(console.state()))?;
    console.load().await;
    writeln!(out, "{}", render_state(console.state()))?;

    let mut lines = input.lines();
    writeln!(out, "\nAdd New Product (leave ID empty to quit)")?;

    while read_form(console.form_mut(), &mut lines, out).await? {
        // Failures are logged by the console; the table stays as it was.
        if console.submit().await.is_ok() {
            writeln!(out, "{}", render_state(console.state()))?;
        }
    }

    if !console.form().is_empty() {
        writeln!(out, "Discarded unsaved product")?;
    }
    Ok(())
}

/// Prompt for each field in order. Returns `false` when the user leaves the
/// ID blank or input ends.
///
/// Values kept from a previous attempt are shown in brackets and a blank
/// answer keeps them. A blank answer for an empty required field asks again.
pub async fn read_form<R, W>(
    form: &mut ProductForm,
    lines: &mut Lines<R>,
    out: &mut W,
) -> io::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    for field in FormField::ALL {
        loop {
            let current = form.get(field);
            if current.is_empty() {
                write!(out, "{}: ", field.label())?;
            } else {
                write!(out, "{} [{}]: ", field.label(), current)?;
            }
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                return Ok(false);
            };
            let value = line.trim();

            if !value.is_empty() {
                form.set(field, value);
                break;
            }
            if field == FormField::Id {
                return Ok(false);
            }
            if !form.get(field).is_empty() {
                break;
            }
            writeln!(out, "{} is required", field.label())?;
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ProductRow;
    use crate::error::{ConsoleError, Result};
    use crate::form::NewProduct;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Directory {
        products: Mutex<Vec<ProductRow>>,
        reject_writes: bool,
    }

    impl Directory {
        fn new(reject_writes: bool) -> Self {
            Self {
                products: Mutex::new(vec![ProductRow {
                    id: "1".into(),
                    name: "Infinix".into(),
                    category: "mobile".into(),
                    price: 200,
                }]),
                reject_writes,
            }
        }
    }

    #[async_trait]
    impl DirectoryApi for Directory {
        async fn fetch_products(&self) -> Result<Vec<ProductRow>> {
            Ok(self.products.lock().unwrap().clone())
        }

        async fn create_product(&self, product: &NewProduct) -> Result<Vec<ProductRow>> {
            if self.reject_writes {
                return Err(ConsoleError::GraphQl("mutation rejected".into()));
            }
            let mut products = self.products.lock().unwrap();
            products.push(ProductRow {
                id: product.id.clone(),
                name: product.name.clone(),
                category: product.category.clone(),
                price: product.price,
            });
            Ok(products.clone())
        }
    }

    async fn read(form: &mut ProductForm, input: &'static str) -> (bool, String) {
        let mut lines = input.as_bytes().lines();
        let mut out = Vec::new();
        let ready = read_form(form, &mut lines, &mut out).await.unwrap();
        (ready, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_blank_id_quits() {
        let mut form = ProductForm::new();
        let (ready, out) = read(&mut form, "\n").await;

        assert!(!ready);
        assert!(form.is_empty());
        assert_eq!(out, "ID: ");
    }

    #[tokio::test]
    async fn test_blank_required_field_is_asked_again() {
        let mut form = ProductForm::new();
        let (ready, out) = read(&mut form, "4\nMacBook\n\n  \nlaptop\n1500\n").await;

        assert!(ready);
        assert_eq!(out.matches("Category is required").count(), 2);
        assert_eq!(form.get(FormField::Category), "laptop");
        assert_eq!(form.to_input().unwrap().price, 1500);
    }

    #[tokio::test]
    async fn test_blank_answer_keeps_previous_value() {
        let mut form = ProductForm::new();
        form.set(FormField::Id, "4");
        form.set(FormField::Name, "MacBook");
        form.set(FormField::Category, "laptop");
        form.set(FormField::Price, "cheap");

        let (ready, out) = read(&mut form, "5\n\n\n1500\n").await;

        assert!(ready);
        assert!(out.contains("ID [4]: "));
        assert_eq!(form.get(FormField::Id), "5");
        assert_eq!(form.get(FormField::Name), "MacBook");
        assert_eq!(form.get(FormField::Price), "1500");
    }

    #[tokio::test]
    async fn test_blank_id_quits_with_kept_values() {
        let mut form = ProductForm::new();
        form.set(FormField::Id, "4");

        let (ready, _) = read(&mut form, "\n").await;
        assert!(!ready);
        assert_eq!(form.get(FormField::Id), "4");
    }

    #[tokio::test]
    async fn test_end_of_input_quits() {
        let mut form = ProductForm::new();
        let (ready, _) = read(&mut form, "4\nMac").await;
        assert!(!ready);
    }

    #[tokio::test]
    async fn test_session_adds_product_and_rerenders() {
        let mut console = ProductConsole::new(Directory::new(false));
        let mut out = Vec::new();

        run(&mut console, "4\nMacBook\nlaptop\n1500\n\n".as_bytes(), &mut out)
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Loading...\n"));
        assert!(out.contains("| 4  | MacBook |"));
        assert!(!out.contains("Discarded"));
        assert!(console.form().is_empty());
    }

    #[tokio::test]
    async fn test_session_quits_after_failed_submit() {
        let mut console = ProductConsole::new(Directory::new(true));
        let mut out = Vec::new();

        run(&mut console, "4\nMacBook\nlaptop\n1500\n\n".as_bytes(), &mut out)
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("ID [4]: "));
        assert!(out.ends_with("Discarded unsaved product\n"));
        assert_eq!(console.form().get(FormField::Name), "MacBook");
    }
}
