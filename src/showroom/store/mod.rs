//! # Storage Layer
//!
//! Persistence for the catalog is split in two:
//!
//! 1. [`backend::StorageBackend`]: the "how". A raw key/value medium that moves
//!    strings in and out ([`fs_backend::FsBackend`] on disk,
//!    [`mem_backend::MemBackend`] for tests).
//! 2. [`product_store::ProductStore`]: the "what". Serializes the whole product
//!    collection as one JSON array under a single fixed key.
//!
//! ## Failure Model
//!
//! The in-memory catalog is authoritative for the running session, so storage
//! problems never abort anything:
//! - `load` folds every failure (missing, unreadable, corrupt) into `None`.
//! - `save` returns the error; the update command turns it into a warning.
//!
//! ## Storage Layout
//!
//! ```text
//! $SHOWROOM_HOME/
//! ├── showroom_products.json   # JSON array of products (camelCase fields)
//! └── config.json              # ShowroomConfig
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod product_store;

use fs_backend::FsBackend;
use mem_backend::MemBackend;
use product_store::ProductStore;

pub type FileStore = ProductStore<FsBackend>;
pub type InMemoryStore = ProductStore<MemBackend>;

impl FileStore {
    pub fn new(root: std::path::PathBuf) -> Self {
        ProductStore::with_backend(FsBackend::new(root))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ProductStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Category, Product};

    pub fn product(id: &str, category: &str, title: &str, price: u64) -> Product {
        Product {
            id: id.to_string(),
            code: format!("SKU-{}", id.to_uppercase()),
            category: Category::new(category),
            title: title.to_string(),
            description: format!("{} description", title),
            price,
            image_folder: category.to_string(),
            image_name: format!("{}.jpeg", id),
        }
    }

    /// A store that already holds `products`, as if saved by an earlier session.
    pub fn saved_store(products: &[Product]) -> InMemoryStore {
        let store = InMemoryStore::new();
        store.save(products).unwrap();
        store
    }

    /// Small mixed catalog: two home pieces, one office piece, one outdoor piece.
    pub fn small_catalog() -> Vec<Product> {
        vec![
            product("h1", "home", "Luxury Fabric Sofa", 185000),
            product("o1", "office", "Pro Executive Desk", 98000),
            product("h3", "home", "Minimalist Walnut Coffee Table", 35000),
            product("g1", "garden", "Teak Bench", 40000),
        ]
    }
}
