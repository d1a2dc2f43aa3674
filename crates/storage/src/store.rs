//! Storage-backed product store.

use chrono::{DateTime, Utc};
use thiserror::Error;

use shelfstack_catalog::{Product, ProductDraft, ProductId, ValidationReport, validate_draft};
use shelfstack_core::DomainError;

use crate::backend::{CatalogSlot, StorageError};
use crate::seed::sample_catalog;

/// Product store operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The submitted draft failed field validation; nothing was persisted.
    #[error("draft rejected: {} invalid field(s)", .0.len())]
    Rejected(ValidationReport),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Owner of the canonical product list.
///
/// The list is loaded from a [`CatalogSlot`] at open and kept in memory;
/// every mutation validates its input, writes the updated list through the
/// slot, and only then commits it in memory — a failed write leaves both
/// sides as they were. Ordering is newest-first: `add` prepends.
pub struct ProductStore {
    slot: Box<dyn CatalogSlot>,
    products: Vec<Product>,
}

impl ProductStore {
    /// Open the store, seeding an empty slot with the sample catalog.
    ///
    /// Seeding happens at most once per slot: a non-empty slot is never
    /// touched, so reopening cannot duplicate the samples.
    pub fn open(slot: Box<dyn CatalogSlot>) -> Result<Self, StorageError> {
        Self::open_at(slot, Utc::now())
    }

    /// [`ProductStore::open`] with an explicit seeding instant.
    pub fn open_at(slot: Box<dyn CatalogSlot>, now: DateTime<Utc>) -> Result<Self, StorageError> {
        let mut products = slot.load()?;
        if products.is_empty() {
            products = sample_catalog(now);
            slot.save(&products)?;
            tracing::info!(count = products.len(), "seeded empty catalog slot");
        }
        Ok(Self { slot, products })
    }

    /// Current products, newest first.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up one record by identifier.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Validate and add a new record at the front of the list.
    ///
    /// Assigns a fresh identifier and stamps both timestamps with the
    /// current instant.
    pub fn add(&mut self, draft: &ProductDraft) -> Result<Product, StoreError> {
        self.add_at(draft, Utc::now())
    }

    /// [`ProductStore::add`] with an explicit creation instant.
    pub fn add_at(&mut self, draft: &ProductDraft, now: DateTime<Utc>) -> Result<Product, StoreError> {
        let report = validate_draft(draft);
        if !report.is_valid() {
            return Err(StoreError::Rejected(report));
        }

        let product = Product::create(ProductId::generate(), draft, now)?;

        let mut next = Vec::with_capacity(self.products.len() + 1);
        next.push(product.clone());
        next.extend(self.products.iter().cloned());
        self.commit(next)?;

        tracing::info!(id = %product.id, name = %product.name, "product added");
        Ok(product)
    }

    /// Validate and replace all form-editable fields of an existing record.
    ///
    /// Refreshes the last-modified timestamp; identifier and creation
    /// timestamp are untouched. An unknown identifier is a no-op, not an
    /// error: `Ok(None)`.
    pub fn update(&mut self, id: ProductId, draft: &ProductDraft) -> Result<Option<Product>, StoreError> {
        self.update_at(id, draft, Utc::now())
    }

    /// [`ProductStore::update`] with an explicit modification instant.
    pub fn update_at(
        &mut self,
        id: ProductId,
        draft: &ProductDraft,
        now: DateTime<Utc>,
    ) -> Result<Option<Product>, StoreError> {
        let report = validate_draft(draft);
        if !report.is_valid() {
            return Err(StoreError::Rejected(report));
        }

        let Some(position) = self.products.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        let mut updated = self.products[position].clone();
        updated.apply_draft(draft, now)?;

        let mut next = self.products.clone();
        next[position] = updated.clone();
        self.commit(next)?;

        tracing::info!(id = %id, "product updated");
        Ok(Some(updated))
    }

    /// Remove one record. Returns whether anything was removed; an unknown
    /// identifier is a no-op.
    pub fn delete(&mut self, id: ProductId) -> Result<bool, StorageError> {
        let next: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        let removed = next.len() < self.products.len();
        self.commit(next)?;

        if removed {
            tracing::info!(id = %id, "product deleted");
        }
        Ok(removed)
    }

    /// Remove every record whose identifier appears in `ids`. Identifiers
    /// with no matching record are ignored. Returns the removed count.
    pub fn bulk_delete(&mut self, ids: &[ProductId]) -> Result<usize, StorageError> {
        let next: Vec<Product> = self
            .products
            .iter()
            .filter(|p| !ids.contains(&p.id))
            .cloned()
            .collect();
        let removed = self.products.len() - next.len();
        self.commit(next)?;

        if removed > 0 {
            tracing::info!(removed, "products bulk-deleted");
        }
        Ok(removed)
    }

    /// Persist `next` and only then adopt it as the in-memory list.
    fn commit(&mut self, next: Vec<Product>) -> Result<(), StorageError> {
        self.slot.save(&next)?;
        self.products = next;
        Ok(())
    }
}
