use crate::api::ShowroomApi;
use crate::config::ShowroomConfig;
use crate::error::{Result, ShowroomError};
use crate::store::fs_backend::FsBackend;
use crate::store::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the data directory (used by tests and kiosk setups).
pub const HOME_ENV: &str = "SHOWROOM_HOME";

pub struct ShowroomContext {
    pub api: ShowroomApi<FsBackend>,
}

/// `$SHOWROOM_HOME` if set and non-empty, else the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("com", "showroom", "showroom")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShowroomError::Config("Could not determine data directory".to_string()))
}

pub fn initialize(data_dir: &Path) -> Result<ShowroomContext> {
    let config = ShowroomConfig::load(data_dir)?;
    let store = FileStore::new(data_dir.to_path_buf());
    let api = ShowroomApi::new(store, config);

    tracing::debug!(
        data_dir = %data_dir.display(),
        seed = ?api.seed(),
        products = api.catalog().len(),
        "catalog ready"
    );

    Ok(ShowroomContext { api })
}
