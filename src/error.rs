//! Error types for registry, provider, and accessor operations.

use thiserror::Error;

/// Errors surfaced by the registry and the accessors.
///
/// Duplicate registration is deliberately absent: it is reported through
/// [`crate::registry::SetOutcome`] and a log line, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("Dependency identifier must not be empty")]
    EmptyIdentifier,

    #[error(
        "Dependency with id \"{id}\" not found. Register it with set() or create_context() first"
    )]
    NotRegistered { id: String },

    #[error(
        "Dependency with id \"{id}\" is not provided in the current scope. Wrap the caller with provide()"
    )]
    NotProvided { id: String },

    #[error("Dependency with id \"{id}\" holds {found}, not {expected}")]
    TypeMismatch {
        id: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Global registry has not been initialized; call init_global() at startup")]
    RegistryUninitialized,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl ContextError {
    /// True for the two "nothing to read" failures. The safe accessor logs
    /// these at debug level and anything else at warn.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            ContextError::NotRegistered { .. } | ContextError::NotProvided { .. }
        )
    }
}

impl From<config::ConfigError> for ContextError {
    fn from(err: config::ConfigError) -> Self {
        ContextError::ConfigError(err.to_string())
    }
}
