use super::backend::StorageBackend;
use crate::error::{Result, ShowroomError};
use crate::model::Product;
use std::collections::HashSet;
use std::path::PathBuf;

/// Fixed key the catalog is saved under.
pub const STORAGE_KEY: &str = "showroom_products";

/// Translates the product collection to and from a [`StorageBackend`].
pub struct ProductStore<B: StorageBackend> {
    pub(crate) backend: B,
}

impl<B: StorageBackend> ProductStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location(STORAGE_KEY)
    }

    /// Load the saved collection.
    ///
    /// Never fails: a missing key, an unreadable value, bad JSON, an empty
    /// array or duplicate ids all come back as `None`, meaning "use the
    /// defaults". Updates never shrink the catalog, so an empty save is not
    /// one this store wrote.
    pub fn load(&self) -> Option<Vec<Product>> {
        let raw = match self.backend.read(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no saved catalog at {}", self.location().display());
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not read saved catalog");
                return None;
            }
        };

        let products: Vec<Product> = match serde_json::from_str(&raw) {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(error = %e, "saved catalog is not valid, ignoring it");
                return None;
            }
        };

        if products.is_empty() {
            tracing::warn!("saved catalog is empty, ignoring it");
            return None;
        }

        if let Some(id) = first_duplicate_id(&products) {
            tracing::warn!(%id, "saved catalog repeats a product id, ignoring it");
            return None;
        }

        tracing::debug!(count = products.len(), "loaded saved catalog");
        Some(products)
    }

    /// Replace the saved collection with `products`.
    pub fn save(&self, products: &[Product]) -> Result<()> {
        let content =
            serde_json::to_string_pretty(products).map_err(ShowroomError::Serialization)?;
        self.backend.write(STORAGE_KEY, &content)?;
        tracing::info!(count = products.len(), "catalog saved");
        Ok(())
    }
}

fn first_duplicate_id(products: &[Product]) -> Option<&str> {
    let mut seen = HashSet::new();
    products
        .iter()
        .map(|p| p.id.as_str())
        .find(|id| !seen.insert(*id))
}
