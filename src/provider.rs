//! Provider: supply a value for a named dependency over a scope.

use crate::registry::ContextRegistry;
use crate::types::DependencyKey;
use tracing::error;

/// Supply `value` for the handle registered under `id` while `children` runs.
///
/// When `id` is unknown, or registered with a type other than `T`, the failure
/// is logged and `children` runs without anything supplied. Nested providers
/// for the same `id` shadow the outer value inside their scope.
pub fn provide<T, R>(
    registry: &ContextRegistry,
    id: &str,
    value: T,
    children: impl FnOnce() -> R,
) -> R
where
    T: Send + Sync + 'static,
{
    let Some(erased) = registry.get_any(id) else {
        error!(
            "Context with id {} not found. Make sure to register it first.",
            id
        );
        return children();
    };
    match erased.downcast::<T>() {
        Some(handle) => handle.scope(value, children),
        None => {
            error!(
                "Context with id {} holds {}, cannot provide {}",
                id,
                erased.type_name(),
                std::any::type_name::<T>()
            );
            children()
        }
    }
}

/// Typed-key variant of [`provide`]
pub fn provide_key<T, R>(
    registry: &ContextRegistry,
    key: DependencyKey<T>,
    value: T,
    children: impl FnOnce() -> R,
) -> R
where
    T: Send + Sync + 'static,
{
    provide(registry, key.id(), value, children)
}

impl ContextRegistry {
    /// See [`provide`]
    pub fn provide<T, R>(&self, id: &str, value: T, children: impl FnOnce() -> R) -> R
    where
        T: Send + Sync + 'static,
    {
        provide(self, id, value, children)
    }
}

/// A pending provision: an identifier and the value to supply for it.
///
/// Useful when the wrapper is built in one place and rendered in another.
#[derive(Debug, Clone)]
pub struct Provider<T> {
    id: String,
    value: T,
}

impl<T: Send + Sync + 'static> Provider<T> {
    pub fn new(id: impl Into<String>, value: T) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Run `children` with the value supplied
    pub fn render<R>(self, registry: &ContextRegistry, children: impl FnOnce() -> R) -> R {
        provide(registry, &self.id, self.value, children)
    }
}
