//! MergeService: orchestrates sources, applies merge policy, deserializes to DepslotConfig.

use crate::config::sources::{environment, local_file};
use crate::config::DepslotConfig;
use config::{ConfigError, File};
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from the standard sources.
    /// Precedence: defaults (lowest) -> depslot.toml under `root` -> environment (highest).
    pub fn load(root: &Path) -> Result<DepslotConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = local_file::add_to_builder(builder, root)?;
        let builder = environment::add_to_builder(builder)?;

        builder.build()?.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<DepslotConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path));
        let builder = environment::add_to_builder(builder)?;

        builder.build()?.try_deserialize()
    }
}
