use crate::error::Result;
use std::path::PathBuf;

/// Raw key/value storage medium.
///
/// Backends only move strings in and out; what the strings mean is the
/// business of [`ProductStore`](super::product_store::ProductStore).
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) when the key has never been written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Where the value for `key` lives. For MemBackend, a virtual path.
    fn location(&self, key: &str) -> PathBuf;
}
