//! File-backed catalog slot.
//!
//! One JSON file holds the whole product list. A missing file reads as an
//! empty slot; the layout is unversioned.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shelfstack_catalog::Product;

use crate::backend::{CatalogSlot, StorageError};

/// JSON-file catalog slot.
#[derive(Debug, Clone)]
pub struct FileCatalogSlot {
    path: PathBuf,
}

impl FileCatalogSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default slot location under the platform data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("shelfstack").join("products.json"))
    }
}

impl CatalogSlot for FileCatalogSlot {
    fn load(&self) -> Result<Vec<Product>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StorageError::Read(format!(
                    "{}: {err}",
                    self.path.display()
                )));
            }
        };

        serde_json::from_slice(&bytes)
            .map_err(|err| StorageError::Malformed(format!("{}: {err}", self.path.display())))
    }

    fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| StorageError::Write(format!("{}: {err}", parent.display())))?;
        }

        let json = serde_json::to_string_pretty(products)
            .map_err(|err| StorageError::Write(format!("serialization: {err}")))?;

        fs::write(&self.path, json)
            .map_err(|err| StorageError::Write(format!("{}: {err}", self.path.display())))
    }
}
