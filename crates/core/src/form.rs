//! Structured product form input.

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::product::{NewProduct, Product};
use crate::types::ProductId;
use crate::validation;

/// Raw values entered in the create/edit form.
///
/// `id` is set when the form edits an existing product. `price` is `None`
/// until a number has been entered. No field is trusted until
/// [`ProductForm::validate`] has turned the form into a [`NewProduct`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
}

impl ProductForm {
    /// Set the price from raw text the way a numeric input does: blank or
    /// unparsable text leaves the price unentered.
    pub fn set_price_input(&mut self, raw: &str) {
        self.price = raw.trim().parse::<f64>().ok().filter(|p| p.is_finite());
    }

    /// Whether the form edits an existing product.
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Validate the form, reporting every missing field.
    pub fn validate(&self) -> Result<NewProduct, ValidationErrors> {
        validation::validate_form(self)
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            title: product.title.clone(),
            price: Some(product.price),
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_input_parses_numbers() {
        let mut form = ProductForm::default();
        form.set_price_input("12.50");
        assert_eq!(form.price, Some(12.5));
        form.set_price_input(" 7 ");
        assert_eq!(form.price, Some(7.0));
    }

    #[test]
    fn blank_or_garbage_price_input_is_unentered() {
        let mut form = ProductForm::default();
        form.set_price_input("3");
        form.set_price_input("");
        assert_eq!(form.price, None);
        form.set_price_input("abc");
        assert_eq!(form.price, None);
        form.set_price_input("NaN");
        assert_eq!(form.price, None);
    }

    #[test]
    fn edit_form_is_prefilled_from_product() {
        let product = Product {
            id: 9,
            title: "Ring".to_string(),
            price: 695.0,
            description: "Gold".to_string(),
            category: "jewelery".to_string(),
            image: "https://example.test/9.jpg".to_string(),
            rating: None,
        };
        let form = ProductForm::from(&product);
        assert!(form.is_edit());
        assert_eq!(form.id, Some(9));
        assert_eq!(form.price, Some(695.0));
        assert_eq!(form.validate().unwrap().title, "Ring");
    }

    #[test]
    fn default_form_is_a_create_form() {
        assert!(!ProductForm::default().is_edit());
    }
}
