//! Catalog filtering.
//!
//! A pure projection of the product list through free-text search plus the
//! filter-panel criteria. Recomputed from scratch on every input change;
//! identical inputs produce identical output.

use serde::{Deserialize, Serialize};

use shelfstack_core::ValueObject;

use crate::product::Product;

/// Category constraint: everything, or one category exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategorySelector {
    #[default]
    Any,
    Is(String),
}

impl CategorySelector {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelector::Any => true,
            CategorySelector::Is(wanted) => wanted == category,
        }
    }
}

/// Stock-status constraint against the record's `in_stock` flag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StockStatus {
    #[default]
    Any,
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn matches(&self, in_stock: bool) -> bool {
        match self {
            StockStatus::Any => true,
            StockStatus::InStock => in_stock,
            StockStatus::OutOfStock => !in_stock,
        }
    }
}

/// Inclusive price bounds.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
        }
    }
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Filter-panel state. Transient; never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub category: CategorySelector,
    pub stock_status: StockStatus,
    pub price_range: PriceRange,
}

impl ValueObject for FilterCriteria {}

impl FilterCriteria {
    /// Number of criteria narrowed away from their defaults (badge count in
    /// the filter panel).
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.category != CategorySelector::Any {
            count += 1;
        }
        if self.stock_status != StockStatus::Any {
            count += 1;
        }
        if self.price_range != PriceRange::default() {
            count += 1;
        }
        count
    }
}

/// Select the products matching the search term and every criterion.
///
/// Conjunctive: an empty term matches everything, otherwise the term must be
/// a case-insensitive substring of the name or the description. Relative
/// order of the input is preserved; the input itself is untouched.
pub fn filter_products(products: &[Product], search: &str, criteria: &FilterCriteria) -> Vec<Product> {
    let needle = search.to_lowercase();

    products
        .iter()
        .filter(|product| {
            let matches_search = needle.is_empty()
                || product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle);

            matches_search
                && criteria.category.matches(&product.category)
                && criteria.stock_status.matches(product.in_stock)
                && criteria.price_range.contains(product.price)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{ProductDraft, ProductId};
    use chrono::Utc;

    fn product(name: &str, description: &str, category: &str, price: f64, in_stock: bool) -> Product {
        let draft = ProductDraft {
            name: name.to_string(),
            description: description.to_string(),
            price: Some(price),
            category: category.to_string(),
            stock: Some(if in_stock { 5 } else { 0 }),
            image_url: None,
            in_stock,
        };
        Product::create(ProductId::generate(), &draft, Utc::now()).unwrap()
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("Thermos Flask", "Keeps drinks hot for twelve hours", "Home & Garden", 24.5, true),
            product("Trail Runners", "Lightweight running shoes with deep lugs", "Sports", 119.0, true),
            product("Paperback Mystery", "A locked-room mystery on a night train", "Books", 9.99, false),
            product("Desk Lamp", "Adjustable arm, warm light for reading", "Home & Garden", 39.0, false),
        ]
    }

    #[test]
    fn empty_search_and_default_criteria_return_everything_in_order() {
        let products = fixture();
        let visible = filter_products(&products, "", &FilterCriteria::default());
        assert_eq!(visible, products);
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let products = fixture();

        let by_name = filter_products(&products, "THERMOS", &FilterCriteria::default());
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Thermos Flask");

        let by_description = filter_products(&products, "locked-room", &FilterCriteria::default());
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "Paperback Mystery");

        assert!(filter_products(&products, "no such thing", &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn category_filter_is_exact() {
        let products = fixture();
        let criteria = FilterCriteria {
            category: CategorySelector::Is("Home & Garden".to_string()),
            ..FilterCriteria::default()
        };
        let visible = filter_products(&products, "", &criteria);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category == "Home & Garden"));
    }

    #[test]
    fn stock_status_partitions_the_catalog() {
        let products = fixture();

        let in_stock = filter_products(
            &products,
            "",
            &FilterCriteria {
                stock_status: StockStatus::InStock,
                ..FilterCriteria::default()
            },
        );
        let out_of_stock = filter_products(
            &products,
            "",
            &FilterCriteria {
                stock_status: StockStatus::OutOfStock,
                ..FilterCriteria::default()
            },
        );

        assert!(in_stock.iter().all(|p| p.in_stock));
        assert!(out_of_stock.iter().all(|p| !p.in_stock));
        assert_eq!(in_stock.len() + out_of_stock.len(), products.len());
        for p in &in_stock {
            assert!(!out_of_stock.iter().any(|q| q.id == p.id));
        }
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let products = fixture();
        let criteria = FilterCriteria {
            price_range: PriceRange::new(9.99, 39.0),
            ..FilterCriteria::default()
        };
        let visible = filter_products(&products, "", &criteria);
        let names: Vec<&str> = visible.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Thermos Flask", "Paperback Mystery", "Desk Lamp"]);
    }

    #[test]
    fn criteria_compose_conjunctively() {
        let products = fixture();
        let criteria = FilterCriteria {
            category: CategorySelector::Is("Home & Garden".to_string()),
            stock_status: StockStatus::InStock,
            ..FilterCriteria::default()
        };
        let visible = filter_products(&products, "hot", &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Thermos Flask");
    }

    #[test]
    fn filtering_leaves_the_input_untouched() {
        let products = fixture();
        let before = products.clone();
        let _ = filter_products(&products, "lamp", &FilterCriteria::default());
        assert_eq!(products, before);
    }

    #[test]
    fn active_count_tracks_non_default_criteria() {
        assert_eq!(FilterCriteria::default().active_count(), 0);

        let criteria = FilterCriteria {
            category: CategorySelector::Is("Books".to_string()),
            stock_status: StockStatus::OutOfStock,
            price_range: PriceRange::new(0.0, 50.0),
        };
        assert_eq!(criteria.active_count(), 3);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            proptest::collection::vec(
                ("[a-z]{1,12}", "[a-z ]{10,40}", 0.0f64..500.0, any::<bool>()),
                0..12,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .map(|(name, description, price, in_stock)| {
                        product(&name, &description, "Other", price, in_stock)
                    })
                    .collect()
            })
        }

        proptest! {
            /// The filtered list is always an order-preserving subsequence.
            #[test]
            fn output_is_a_subsequence_of_the_input(products in arb_products(), term in "[a-z]{0,4}") {
                let visible = filter_products(&products, &term, &FilterCriteria::default());
                let mut cursor = 0;
                for p in &visible {
                    let pos = products[cursor..]
                        .iter()
                        .position(|q| q.id == p.id)
                        .expect("filtered product missing from input");
                    cursor += pos + 1;
                }
            }

            /// Stock partition: in-stock and out-of-stock split the catalog.
            #[test]
            fn stock_partition_is_exact(products in arb_products()) {
                let base = FilterCriteria::default();
                let in_stock = filter_products(&products, "", &FilterCriteria {
                    stock_status: StockStatus::InStock,
                    ..base.clone()
                });
                let out = filter_products(&products, "", &FilterCriteria {
                    stock_status: StockStatus::OutOfStock,
                    ..base
                });
                prop_assert_eq!(in_stock.len() + out.len(), products.len());
            }

            /// Same inputs, same output (pure projection).
            #[test]
            fn filtering_is_idempotent(products in arb_products(), term in "[a-z]{0,4}") {
                let first = filter_products(&products, &term, &FilterCriteria::default());
                let second = filter_products(&products, &term, &FilterCriteria::default());
                prop_assert_eq!(first, second);
            }
        }
    }
}
