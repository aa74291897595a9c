//! Injector: a self-contained typed dependency slot.
//!
//! Owns its handle and the instance it supplies. The instance can be swapped
//! with [`Injector::override_instance`] (a mock in tests, say) before the
//! next [`Injector::provide`]. No registry is involved unless the handle is
//! published with [`Injector::register`].

use crate::error::ContextError;
use crate::handle::ContextHandle;
use crate::registry::{ContextRegistry, SetOutcome};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

pub struct Injector<T> {
    handle: ContextHandle<T>,
    instance: RwLock<Arc<T>>,
}

impl<T: Send + Sync + 'static> Injector<T> {
    pub fn new(instance: T) -> Self {
        Self {
            handle: ContextHandle::without_default(),
            instance: RwLock::new(Arc::new(instance)),
        }
    }

    pub fn handle(&self) -> &ContextHandle<T> {
        &self.handle
    }

    /// Instance the next `provide` will supply
    pub fn instance(&self) -> Arc<T> {
        Arc::clone(&self.instance.read())
    }

    /// Replace the instance; returns the previous one.
    ///
    /// Scopes already entered keep the instance they were entered with.
    pub fn override_instance(&self, instance: T) -> Arc<T> {
        debug!(handle = %self.handle.id(), "Overriding injector instance");
        std::mem::replace(&mut *self.instance.write(), Arc::new(instance))
    }

    /// Supply the current instance while `children` runs
    pub fn provide<R>(&self, children: impl FnOnce() -> R) -> R {
        let _guard = self.handle.supply_arc(self.instance());
        children()
    }

    /// Nearest instance supplied by this injector
    pub fn use_instance(&self) -> Result<Arc<T>, ContextError> {
        self.handle
            .read_supplied()
            .ok_or_else(|| ContextError::NotProvided {
                id: std::any::type_name::<T>().to_string(),
            })
    }

    /// Publish this injector's handle under `id`
    pub fn register(&self, registry: &ContextRegistry, id: &str) -> Result<SetOutcome, ContextError> {
        registry.set(id, &self.handle)
    }
}
