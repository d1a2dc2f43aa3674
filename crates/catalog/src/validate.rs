//! Draft validation.
//!
//! All applicable rules are evaluated and collected into a per-field report;
//! nothing short-circuits across fields. At most one message is retained per
//! field (the first failing rule in its chain).

use std::collections::BTreeMap;

use url::Url;

use crate::product::ProductDraft;

/// Form field a validation message is attached to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Description,
    Price,
    Category,
    Stock,
    ImageUrl,
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Price => "price",
            Field::Category => "category",
            Field::Stock => "stock",
            Field::ImageUrl => "imageUrl",
        };
        f.write_str(label)
    }
}

/// Outcome of validating a draft: one message per failing field.
///
/// Valid iff no field has a message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for one field, if that field failed.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, msg)| (*f, msg.as_str()))
    }

    fn reject(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

/// Maximum accepted price / stock quantity (exclusive).
const AMOUNT_LIMIT: f64 = 999_999.0;
const STOCK_LIMIT: i64 = 999_999;

/// Validate a draft against the catalog field rules.
///
/// Pure and deterministic: same draft, same report.
pub fn validate_draft(draft: &ProductDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    let name = draft.name.trim();
    if name.is_empty() {
        report.reject(Field::Name, "Product name is required");
    } else if name.chars().count() < 2 {
        report.reject(Field::Name, "Product name must be at least 2 characters long");
    } else if draft.name.chars().count() > 100 {
        report.reject(Field::Name, "Product name must be less than 100 characters");
    }

    let description = draft.description.trim();
    if description.is_empty() {
        report.reject(Field::Description, "Product description is required");
    } else if description.chars().count() < 10 {
        report.reject(
            Field::Description,
            "Description must be at least 10 characters long",
        );
    } else if draft.description.chars().count() > 500 {
        report.reject(Field::Description, "Description must be less than 500 characters");
    }

    match draft.price {
        None => report.reject(Field::Price, "Price is required"),
        Some(price) if price < 0.0 => {
            report.reject(Field::Price, "Price must be a positive number");
        }
        Some(price) if price >= AMOUNT_LIMIT => {
            report.reject(Field::Price, "Price must be less than $999,999");
        }
        Some(_) => {}
    }

    if draft.category.trim().is_empty() {
        report.reject(Field::Category, "Category is required");
    }

    match draft.stock {
        None => report.reject(Field::Stock, "Stock quantity is required"),
        Some(stock) if stock < 0 => {
            report.reject(Field::Stock, "Stock quantity must be a positive number");
        }
        Some(stock) if stock >= STOCK_LIMIT => {
            report.reject(Field::Stock, "Stock quantity must be less than 999,999");
        }
        Some(_) => {}
    }

    // Optional field: only a non-blank entry has to parse as a URL.
    if let Some(image_url) = draft.image_url.as_deref() {
        let trimmed = image_url.trim();
        if !trimmed.is_empty() && Url::parse(trimmed).is_err() {
            report.reject(Field::ImageUrl, "Please enter a valid URL");
        }
    }

    report
}
