use super::backend::StorageBackend;
use crate::error::{Result, ShowroomError};
use std::fs;
use std::path::PathBuf;

/// Stores each key as `{root}/{key}.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShowroomError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.location(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ShowroomError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        let target = self.location(key);
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", key, std::process::id()));
        fs::write(&tmp, value).map_err(ShowroomError::Io)?;
        fs::rename(&tmp, target).map_err(ShowroomError::Io)?;

        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}
