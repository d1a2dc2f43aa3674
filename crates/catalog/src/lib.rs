//! Catalog domain module.
//!
//! This crate contains business rules for the product catalog, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod filter;
pub mod product;
pub mod validate;

pub use filter::{CategorySelector, FilterCriteria, PriceRange, StockStatus, filter_products};
pub use product::{CATEGORIES, Product, ProductDraft, ProductId};
pub use validate::{Field, ValidationReport, validate_draft};
