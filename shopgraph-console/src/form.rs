//! Form state for a new product, keyed by field name.

use crate::error::{ConsoleError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Id,
    Name,
    Category,
    Price,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Id,
        FormField::Name,
        FormField::Category,
        FormField::Price,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormField::Id => "id",
            FormField::Name => "name",
            FormField::Category => "category",
            FormField::Price => "price",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Id => "ID",
            FormField::Name => "Name",
            FormField::Category => "Category",
            FormField::Price => "Price",
        }
    }
}

impl FromStr for FormField {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| ConsoleError::UnknownField(s.to_string()))
    }
}

/// Variables for the create mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: i32,
}

#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    values: BTreeMap<FormField, String>,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Update a field by its name, as a change event would
    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = name.parse::<FormField>()?;
        self.set(field, value);
        Ok(())
    }

    pub fn get(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.is_empty())
    }

    /// Fields still blank, in form order
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Check required fields and convert the price text to an integer.
    pub fn to_input(&self) -> Result<NewProduct> {
        if let Some(field) = self.missing_fields().first() {
            return Err(ConsoleError::MissingField {
                field: field.name(),
            });
        }

        let raw_price = self.get(FormField::Price).trim();
        let price = raw_price
            .parse::<i32>()
            .map_err(|e| ConsoleError::InvalidField {
                field: FormField::Price.name(),
                message: format!("'{raw_price}' is not an integer ({e})"),
            })?;

        Ok(NewProduct {
            id: self.get(FormField::Id).to_string(),
            name: self.get(FormField::Name).to_string(),
            category: self.get(FormField::Category).to_string(),
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        let mut form = ProductForm::new();
        form.set_by_name("id", "4").unwrap();
        form.set_by_name("name", "MacBook").unwrap();
        form.set_by_name("category", "laptop").unwrap();
        form.set_by_name("price", " 1500 ").unwrap();
        form
    }

    #[test]
    fn test_to_input_coerces_price() {
        let input = filled().to_input().unwrap();
        assert_eq!(
            input,
            NewProduct {
                id: "4".into(),
                name: "MacBook".into(),
                category: "laptop".into(),
                price: 1500,
            }
        );
    }

    #[test]
    fn test_all_fields_required() {
        let mut form = filled();
        form.set(FormField::Category, "  ");
        assert_eq!(form.missing_fields(), vec![FormField::Category]);
        assert!(matches!(
            form.to_input(),
            Err(ConsoleError::MissingField { field: "category" })
        ));
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let mut form = filled();
        form.set(FormField::Price, "cheap");
        let err = form.to_input().unwrap_err();
        assert!(err.to_string().starts_with("invalid price"));
    }

    #[test]
    fn test_unknown_field_name() {
        let mut form = ProductForm::new();
        assert!(form.set_by_name("colour", "red").is_err());
        assert!(form.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut form = filled();
        form.clear();
        assert_eq!(form.missing_fields().len(), 4);
        assert_eq!(form.get(FormField::Name), "");
    }
}
