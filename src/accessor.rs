//! Accessors: read the nearest supplied value for a named dependency.

use crate::error::ContextError;
use crate::registry::ContextRegistry;
use crate::types::DependencyKey;
use std::sync::Arc;
use tracing::{debug, warn};

/// Read the nearest value supplied for `id`.
///
/// Fails with `NotRegistered` for an unknown `id`, `TypeMismatch` when the
/// handle holds another type, and `NotProvided` when no enclosing scope
/// supplied a value. The handle's default is not consulted.
pub fn use_dependency<T: Send + Sync + 'static>(
    registry: &ContextRegistry,
    id: &str,
) -> Result<Arc<T>, ContextError> {
    registry
        .resolve::<T>(id)?
        .read_supplied()
        .ok_or_else(|| ContextError::NotProvided { id: id.to_string() })
}

/// Read the nearest value supplied for `id`, falling back to the handle's
/// default. `NotProvided` only when the handle has no default either.
pub fn use_dependency_or_default<T: Send + Sync + 'static>(
    registry: &ContextRegistry,
    id: &str,
) -> Result<Arc<T>, ContextError> {
    registry
        .resolve::<T>(id)?
        .read()
        .ok_or_else(|| ContextError::NotProvided { id: id.to_string() })
}

/// Like [`use_dependency`], but any failure yields `fallback`.
pub fn use_dependency_safe<T: Send + Sync + 'static>(
    registry: &ContextRegistry,
    id: &str,
    fallback: T,
) -> Arc<T> {
    match use_dependency::<T>(registry, id) {
        Ok(value) => value,
        Err(e) if e.is_lookup_miss() => {
            debug!(id, error = %e, "Using fallback dependency");
            Arc::new(fallback)
        }
        Err(e) => {
            warn!(id, error = %e, "Using fallback dependency");
            Arc::new(fallback)
        }
    }
}

pub fn use_key<T: Send + Sync + 'static>(
    registry: &ContextRegistry,
    key: DependencyKey<T>,
) -> Result<Arc<T>, ContextError> {
    use_dependency(registry, key.id())
}

pub fn use_key_safe<T: Send + Sync + 'static>(
    registry: &ContextRegistry,
    key: DependencyKey<T>,
    fallback: T,
) -> Arc<T> {
    use_dependency_safe(registry, key.id(), fallback)
}
