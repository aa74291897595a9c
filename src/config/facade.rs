//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::DepslotConfig;
use crate::error::ContextError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `depslot.toml` under `root` and the environment.
    pub fn load(root: &Path) -> Result<DepslotConfig, ContextError> {
        Ok(MergeService::load(root)?)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<DepslotConfig, ContextError> {
        Ok(MergeService::load_from_file(path)?)
    }
}
