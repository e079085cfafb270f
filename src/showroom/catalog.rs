//! # Catalog Registry
//!
//! The in-memory, ordered product collection for the current session. It is
//! seeded exactly once, from the saved collection if there is one and from
//! [`defaults::products`] otherwise; the two are never merged.
//!
//! Queries are linear scans. Catalogs are a handful of records, and nothing
//! in the public surface depends on the storage being a `Vec`, so an id-keyed
//! index could replace it later.

use crate::defaults;
use crate::model::{Category, Product, ProductUpdate};
use crate::session::AdminGrant;
use crate::store::backend::StorageBackend;
use crate::store::product_store::ProductStore;

/// Where the catalog's initial contents came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    Saved,
    Defaults,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record after the update.
    Updated(Product),
    /// No record has that id; nothing changed.
    Missed,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    seed: Seed,
}

impl Catalog {
    pub fn initialize<B: StorageBackend>(store: &ProductStore<B>) -> Self {
        match store.load() {
            Some(products) => Self {
                products,
                seed: Seed::Saved,
            },
            None => {
                tracing::debug!("seeding catalog from defaults");
                Self {
                    products: defaults::products(),
                    seed: Seed::Defaults,
                }
            }
        }
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn query_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == *category)
            .collect()
    }

    pub fn query_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories, in the order they first appear.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen: Vec<Category> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    }

    /// Overlay `update` onto the record with `id`, in place.
    pub fn update(
        &mut self,
        _grant: &AdminGrant,
        id: &str,
        update: &ProductUpdate,
    ) -> UpdateOutcome {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.apply(update);
                UpdateOutcome::Updated(product.clone())
            }
            None => UpdateOutcome::Missed,
        }
    }
}
