//! Context handles: typed and type-erased.

use crate::error::ContextError;
use crate::scope::{self, SupplyGuard};
use crate::types::HandleId;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

struct HandleInner<T> {
    id: HandleId,
    default: Option<Arc<T>>,
}

/// Scoped-value carrier for values of type `T`.
///
/// Cloning is cheap and yields the identical handle; equality is identity.
pub struct ContextHandle<T> {
    inner: Arc<HandleInner<T>>,
}

impl<T: Send + Sync + 'static> ContextHandle<T> {
    /// Create a handle whose unsupplied read falls back to `default`
    pub fn new(default: T) -> Self {
        Self::build(Some(Arc::new(default)))
    }

    /// Create a handle with no default value
    pub fn without_default() -> Self {
        Self::build(None)
    }

    fn build(default: Option<Arc<T>>) -> Self {
        Self {
            inner: Arc::new(HandleInner {
                id: HandleId::next(),
                default,
            }),
        }
    }

    pub fn id(&self) -> HandleId {
        self.inner.id
    }

    pub fn default_value(&self) -> Option<Arc<T>> {
        self.inner.default.clone()
    }

    /// Supply `value` until the returned guard drops
    pub fn supply(&self, value: T) -> SupplyGuard {
        self.supply_arc(Arc::new(value))
    }

    /// Supply an already shared value until the returned guard drops
    pub fn supply_arc(&self, value: Arc<T>) -> SupplyGuard {
        SupplyGuard::push(self.inner.id, value)
    }

    /// Supply `value` for the duration of `children`
    pub fn scope<R>(&self, value: T, children: impl FnOnce() -> R) -> R {
        let _guard = self.supply(value);
        children()
    }

    /// Nearest value supplied for this handle, ignoring the default
    pub fn read_supplied(&self) -> Option<Arc<T>> {
        scope::nearest(self.inner.id).and_then(|value| value.downcast::<T>().ok())
    }

    /// Nearest supplied value, else the default. `None` means nothing was
    /// supplied and the handle has no default.
    pub fn read(&self) -> Option<Arc<T>> {
        self.read_supplied().or_else(|| self.default_value())
    }

    pub fn erase(&self) -> AnyHandle {
        AnyHandle {
            id: self.inner.id,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            has_default: self.inner.default.is_some(),
            handle: Arc::new(self.clone()),
        }
    }
}

impl<T> Clone for ContextHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for ContextHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl<T> Eq for ContextHandle<T> {}

impl<T> fmt::Debug for ContextHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextHandle")
            .field("id", &self.inner.id)
            .field("type", &std::any::type_name::<T>())
            .field("has_default", &self.inner.default.is_some())
            .finish()
    }
}

/// Type-erased handle as stored in the registry.
#[derive(Clone)]
pub struct AnyHandle {
    id: HandleId,
    type_id: TypeId,
    type_name: &'static str,
    has_default: bool,
    handle: Arc<dyn Any + Send + Sync>,
}

impl AnyHandle {
    pub fn id(&self) -> HandleId {
        self.id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn has_default(&self) -> bool {
        self.has_default
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Recover the typed handle, or `None` when `T` is not the stored type
    pub fn downcast<T: Send + Sync + 'static>(&self) -> Option<ContextHandle<T>> {
        self.handle.downcast_ref::<ContextHandle<T>>().cloned()
    }

    /// Recover the typed handle, failing with `TypeMismatch` naming `id`
    pub(crate) fn typed<T: Send + Sync + 'static>(
        &self,
        id: &str,
    ) -> Result<ContextHandle<T>, ContextError> {
        self.downcast::<T>().ok_or_else(|| ContextError::TypeMismatch {
            id: id.to_string(),
            expected: std::any::type_name::<T>(),
            found: self.type_name,
        })
    }
}

impl PartialEq for AnyHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AnyHandle {}

impl fmt::Debug for AnyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyHandle")
            .field("id", &self.id)
            .field("type", &self.type_name)
            .field("has_default", &self.has_default)
            .finish()
    }
}
