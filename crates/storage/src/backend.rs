//! Catalog slot boundary.
//!
//! This module defines the storage-facing abstraction for loading and saving
//! the serialized product list without making any backend assumptions.

use std::sync::Arc;

use thiserror::Error;

use shelfstack_catalog::Product;

/// Catalog slot operation error.
///
/// These are **infrastructure errors** (IO, serialization) as opposed to
/// domain errors (validation, invariants).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read catalog slot: {0}")]
    Read(String),

    #[error("failed to write catalog slot: {0}")]
    Write(String),

    #[error("catalog slot contains malformed data: {0}")]
    Malformed(String),
}

/// A single named slot of local storage holding the whole product list.
///
/// `load` returns the current contents (an empty list if the slot has never
/// been written); `save` replaces the contents wholesale. There is no
/// partial update and no schema versioning of the slot layout.
pub trait CatalogSlot: Send + Sync {
    /// Read the persisted product list.
    fn load(&self) -> Result<Vec<Product>, StorageError>;

    /// Replace the persisted product list.
    fn save(&self, products: &[Product]) -> Result<(), StorageError>;
}

impl<S> CatalogSlot for Arc<S>
where
    S: CatalogSlot + ?Sized,
{
    fn load(&self) -> Result<Vec<Product>, StorageError> {
        (**self).load()
    }

    fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        (**self).save(products)
    }
}
