use super::backend::StorageBackend;
use crate::error::{Result, ShowroomError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since showroom is single-threaded,
/// which lets `StorageBackend` take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
    writes: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, for exercising the warning path.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Seed a raw value, bypassing serialization (e.g. corrupt JSON).
    pub fn put_raw(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShowroomError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("/mem/{}.json", key))
    }
}
