//! Required-field validation for product forms.
//!
//! A field is missing when its text is empty. `price` is missing when it was
//! not entered, is numerically zero or is NaN, so a free item cannot be saved.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::form::ProductForm;
use crate::product::NewProduct;

/// Editable product fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductField {
    Title,
    Price,
    Description,
    Category,
    Image,
}

impl ProductField {
    /// All fields in form order.
    pub const ALL: [ProductField; 5] = [
        ProductField::Title,
        ProductField::Price,
        ProductField::Description,
        ProductField::Category,
        ProductField::Image,
    ];

    /// Wire / form name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            ProductField::Title => "title",
            ProductField::Price => "price",
            ProductField::Description => "description",
            ProductField::Category => "category",
            ProductField::Image => "image",
        }
    }

    /// Message shown next to the field when it is missing.
    pub fn required_message(self) -> &'static str {
        match self {
            ProductField::Title => "Title is required",
            ProductField::Price => "Price is required",
            ProductField::Description => "Description is required",
            ProductField::Category => "Category is required",
            ProductField::Image => "Image URL is required",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a form and build the draft it describes.
///
/// Every missing field is reported, not just the first one.
pub fn validate_form(form: &ProductForm) -> Result<NewProduct, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if form.title.is_empty() {
        errors.insert(ProductField::Title);
    }
    let price = match form.price {
        Some(price) if price != 0.0 && !price.is_nan() => price,
        _ => {
            errors.insert(ProductField::Price);
            0.0
        }
    };
    if form.description.is_empty() {
        errors.insert(ProductField::Description);
    }
    if form.category.is_empty() {
        errors.insert(ProductField::Category);
    }
    if form.image.is_empty() {
        errors.insert(ProductField::Image);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewProduct {
        title: form.title.clone(),
        price,
        description: form.description.clone(),
        category: form.category.clone(),
        image: form.image.clone(),
    })
}
