pub mod activity;
pub mod curriculum;
pub mod init;
pub mod lesson;
pub mod plan;
pub mod print;
pub mod quiz;

use std::path::PathBuf;

use anyhow::Result;

use ks2_core::config::{load_config_from, Ks2Config};
use ks2_core::store::FileStore;

/// Load config and open the file store it points at.
pub fn open(config_path: Option<PathBuf>) -> Result<(Ks2Config, FileStore)> {
    let config = load_config_from(config_path.as_deref())?;
    let store = FileStore::new(config.data_dir.clone());
    tracing::debug!(data_dir = %config.data_dir.display(), "using data directory");
    Ok((config, store))
}
