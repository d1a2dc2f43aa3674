//! In-memory catalog slot.

use std::sync::RwLock;

use shelfstack_catalog::Product;

use crate::backend::{CatalogSlot, StorageError};

/// In-memory catalog slot.
///
/// Intended for tests/dev. Contents die with the process.
#[derive(Debug, Default)]
pub struct InMemoryCatalogSlot {
    slot: RwLock<Vec<Product>>,
}

impl InMemoryCatalogSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with an existing list (simulates a returning user).
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            slot: RwLock::new(products),
        }
    }
}

impl CatalogSlot for InMemoryCatalogSlot {
    fn load(&self) -> Result<Vec<Product>, StorageError> {
        let slot = self
            .slot
            .read()
            .map_err(|_| StorageError::Read("lock poisoned".to_string()))?;
        Ok(slot.clone())
    }

    fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| StorageError::Write("lock poisoned".to_string()))?;
        *slot = products.to_vec();
        Ok(())
    }
}
