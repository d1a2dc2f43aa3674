//! Product record and form draft.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelfstack_core::{DomainError, DomainResult, Entity, RecordId, ValueObject};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub RecordId);

impl ProductId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }

    /// Generate a fresh identifier (UUIDv7, never collides with prior ids).
    pub fn generate() -> Self {
        Self(RecordId::new())
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Category choices offered by the filter panel and the product form.
///
/// UI convenience only — the stored `category` field is free text and is not
/// constrained to this list.
pub const CATEGORIES: [&str; 10] = [
    "Electronics",
    "Clothing",
    "Books",
    "Home & Garden",
    "Sports",
    "Toys",
    "Beauty",
    "Automotive",
    "Food",
    "Other",
];

/// A catalog record.
///
/// Serialized field names match the persisted slot layout (camelCase,
/// ISO-8601 timestamps).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Product {
    /// Build a new record from a draft.
    ///
    /// Both timestamps are set to `now`. The draft should already have passed
    /// [`crate::validate_draft`]; the checks here only defend the record
    /// invariants (price and stock present and non-negative).
    pub fn create(id: ProductId, draft: &ProductDraft, now: DateTime<Utc>) -> DomainResult<Self> {
        let (price, stock) = draft.price_and_stock()?;
        Ok(Self {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            price,
            category: draft.category.clone(),
            stock,
            image_url: draft.normalized_image_url(),
            in_stock: draft.in_stock,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace all form-editable fields wholesale and refresh `updated_at`.
    ///
    /// The identifier and `created_at` are preserved.
    pub fn apply_draft(&mut self, draft: &ProductDraft, now: DateTime<Utc>) -> DomainResult<()> {
        let (price, stock) = draft.price_and_stock()?;
        self.name = draft.name.clone();
        self.description = draft.description.clone();
        self.price = price;
        self.category = draft.category.clone();
        self.stock = stock;
        self.image_url = draft.normalized_image_url();
        self.in_stock = draft.in_stock;
        self.updated_at = now;
        Ok(())
    }

    /// Draft pre-populated with this record's fields (edit flow).
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: Some(self.price),
            category: self.category.clone(),
            stock: Some(i64::from(self.stock)),
            image_url: self.image_url.clone(),
            in_stock: self.in_stock,
        }
    }
}

/// Form-editable product fields.
///
/// `price` and `stock` are optional so "required but absent" is expressible;
/// the validator reports absence as a field error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub category: String,
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub in_stock: bool,
}

impl ValueObject for ProductDraft {}

impl ProductDraft {
    fn price_and_stock(&self) -> DomainResult<(f64, u32)> {
        let price = self
            .price
            .ok_or_else(|| DomainError::validation("price is required"))?;
        if price < 0.0 {
            return Err(DomainError::invariant("price must be non-negative"));
        }
        let stock = self
            .stock
            .ok_or_else(|| DomainError::validation("stock quantity is required"))?;
        let stock = u32::try_from(stock)
            .map_err(|_| DomainError::invariant("stock must be a non-negative integer"))?;
        Ok((price, stock))
    }

    /// Image reference with blank entries collapsed to `None`.
    fn normalized_image_url(&self) -> Option<String> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    }
}
