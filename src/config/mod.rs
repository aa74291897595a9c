//! Configuration
//!
//! Layered configuration for the registry and logging. Sources are merged by
//! [`merge::service::MergeService`]; most callers go through [`ConfigLoader`].

mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::registry::DuplicatePolicy;
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "depslot.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepslotConfig {
    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Registry behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// What `set` does when the identifier is already registered
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}
