//! Client-side search and category filtering.
//!
//! Both predicates are conjunctive and evaluated on every call; nothing is
//! cached between calls.

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::types::CategoryName;

/// Current search term and category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Case-insensitive title substring. Empty matches everything.
    pub search_term: String,
    /// Exact, case-sensitive category. `None` matches every category.
    pub category: Option<CategoryName>,
}

impl FilterState {
    /// Whether no predicate narrows the result.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.category.is_none()
    }

    /// Whether `product` satisfies both the search and category predicates.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.matches_category(product)
    }

    /// Subsequence of `products` that matches, in the original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    fn matches_search(&self, product: &Product) -> bool {
        product
            .title
            .to_lowercase()
            .contains(&self.search_term.to_lowercase())
    }

    fn matches_category(&self, product: &Product) -> bool {
        match &self.category {
            Some(category) => product.category == *category,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 10.0,
            description: "d".to_string(),
            category: category.to_string(),
            image: "u".to_string(),
            rating: None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Shirt", "clothing"),
            product(2, "Phone", "electronics"),
            product(3, "T-SHIRT slim", "clothing"),
            product(4, "Phone case", "Electronics"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let products = catalog();
        let filter = FilterState::default();
        assert!(filter.is_unfiltered());
        assert_eq!(ids(&filter.apply(&products)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let products = catalog();
        let filter = FilterState {
            search_term: "shirt".to_string(),
            category: None,
        };
        assert_eq!(ids(&filter.apply(&products)), vec![1, 3]);
    }

    #[test]
    fn search_ph_finds_phones() {
        let products = catalog();
        let filter = FilterState {
            search_term: "ph".to_string(),
            category: None,
        };
        assert_eq!(ids(&filter.apply(&products)), vec![2, 4]);
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let products = catalog();
        let filter = FilterState {
            search_term: String::new(),
            category: Some("electronics".to_string()),
        };
        assert_eq!(ids(&filter.apply(&products)), vec![2]);
    }

    #[test]
    fn search_and_category_are_conjunctive() {
        let products = catalog();
        let filter = FilterState {
            search_term: "PHONE".to_string(),
            category: Some("Electronics".to_string()),
        };
        assert_eq!(ids(&filter.apply(&products)), vec![4]);
        assert!(filter.matches(&products[3]));
        assert!(!filter.matches(&products[1]));
    }

    #[test]
    fn no_match_yields_empty() {
        let products = catalog();
        let filter = FilterState {
            search_term: "laptop".to_string(),
            category: None,
        };
        assert!(filter.apply(&products).is_empty());
    }
}
