//! Core identifier types.

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

/// HandleId: process-unique identity of a context handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u64);

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

impl HandleId {
    pub(crate) fn next() -> Self {
        HandleId(NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handle#{}", self.0)
    }
}

/// Typed token naming a dependency slot.
///
/// Declared once next to the dependency's type so every call site agrees on
/// both the identifier and the value type:
///
/// ```
/// use depslot::DependencyKey;
///
/// struct Counter { count: i64 }
///
/// const COUNTER: DependencyKey<Counter> = DependencyKey::new("counter");
/// assert_eq!(COUNTER.id(), "counter");
/// ```
pub struct DependencyKey<T> {
    id: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> DependencyKey<T> {
    pub const fn new(id: &'static str) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }
}

impl<T> Clone for DependencyKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DependencyKey<T> {}

impl<T> fmt::Debug for DependencyKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencyKey")
            .field("id", &self.id)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}
