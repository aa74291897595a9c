//! Dependency registry.
//!
//! Maps string identifiers to type-erased context handles. Identifiers are
//! unique; each maps to exactly one handle. Reads are pure lookups.

use crate::config::RegistryConfig;
use crate::error::ContextError;
use crate::handle::{AnyHandle, ContextHandle};
use crate::types::DependencyKey;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// What `set` does with an identifier that is already registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Replace the existing handle and warn
    #[default]
    Overwrite,
    /// Keep the existing handle and warn
    Reject,
}

/// Result of a `set` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Inserted,
    Replaced,
    Rejected,
}

/// Registry of named dependency slots
pub struct ContextRegistry {
    entries: RwLock<HashMap<String, AnyHandle>>,
    policy: DuplicatePolicy,
}

impl ContextRegistry {
    /// Create an empty registry with the default duplicate policy
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            policy,
        }
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::with_policy(config.duplicate_policy)
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register `handle` under `id`
    pub fn set<T: Send + Sync + 'static>(
        &self,
        id: &str,
        handle: &ContextHandle<T>,
    ) -> Result<SetOutcome, ContextError> {
        self.set_any(id, handle.erase())
    }

    /// Register an already erased handle under `id`
    ///
    /// Duplicates follow the registry's [`DuplicatePolicy`] and are never an error.
    pub fn set_any(&self, id: &str, handle: AnyHandle) -> Result<SetOutcome, ContextError> {
        ensure_identifier(id)?;
        let mut entries = self.entries.write();
        // Displaced handles are dropped after the lock is released.
        let (outcome, _displaced) = match entries.entry(id.to_string()) {
            Entry::Vacant(slot) => {
                debug!(id, handle = %handle.id(), "Registered dependency");
                slot.insert(handle);
                (SetOutcome::Inserted, None)
            }
            Entry::Occupied(mut slot) => match self.policy {
                DuplicatePolicy::Overwrite => {
                    warn!(
                        "Instance with id {} already exists and will be overwritten",
                        id
                    );
                    (SetOutcome::Replaced, Some(slot.insert(handle)))
                }
                DuplicatePolicy::Reject => {
                    warn!("Instance with id {} already exists; keeping the existing one", id);
                    (SetOutcome::Rejected, Some(handle))
                }
            },
        };
        drop(entries);
        Ok(outcome)
    }

    /// Typed lookup. Absent is `Ok(None)`; a handle of another type is an error.
    pub fn get<T: Send + Sync + 'static>(
        &self,
        id: &str,
    ) -> Result<Option<ContextHandle<T>>, ContextError> {
        self.get_any(id).map(|handle| handle.typed(id)).transpose()
    }

    /// Untyped lookup
    pub fn get_any(&self, id: &str) -> Option<AnyHandle> {
        self.entries.read().get(id).cloned()
    }

    /// Resolve `id` to a typed handle or fail with `NotRegistered`
    pub fn resolve<T: Send + Sync + 'static>(
        &self,
        id: &str,
    ) -> Result<ContextHandle<T>, ContextError> {
        self.get::<T>(id)?.ok_or_else(|| ContextError::NotRegistered { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.read().contains_key(id)
    }

    /// Return the handle registered under `id`, creating one seeded with
    /// `default` if there is none.
    ///
    /// Repeat calls return the identical handle and ignore their `default`.
    pub fn create_context<T: Send + Sync + 'static>(
        &self,
        id: &str,
        default: T,
    ) -> Result<ContextHandle<T>, ContextError> {
        self.get_or_create(id, || ContextHandle::new(default))
    }

    /// Like [`create_context`](Self::create_context) for a handle without a default
    pub fn create_context_without_default<T: Send + Sync + 'static>(
        &self,
        id: &str,
    ) -> Result<ContextHandle<T>, ContextError> {
        self.get_or_create(id, ContextHandle::without_default)
    }

    fn get_or_create<T: Send + Sync + 'static>(
        &self,
        id: &str,
        make: impl FnOnce() -> ContextHandle<T>,
    ) -> Result<ContextHandle<T>, ContextError> {
        ensure_identifier(id)?;
        if let Some(existing) = self.get_any(id) {
            return existing.typed(id);
        }

        // Check again under the write lock; another caller may have won.
        let mut entries = self.entries.write();
        match entries.entry(id.to_string()) {
            Entry::Occupied(slot) => slot.get().typed(id),
            Entry::Vacant(slot) => {
                let handle = make();
                debug!(id, handle = %handle.id(), "Created dependency context");
                slot.insert(handle.erase());
                Ok(handle)
            }
        }
    }

    /// Remove the entry for `id`; true if one was removed
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.entries.write().remove(id);
        if removed.is_none() {
            return false;
        }
        debug!(id, "Removed dependency");
        drop(removed);
        true
    }

    /// Remove every entry
    pub fn clear(&self) {
        let cleared = std::mem::take(&mut *self.entries.write());
        debug!(count = cleared.len(), "Cleared dependency registry");
        drop(cleared);
    }

    /// Snapshot of registered identifiers, in no particular order
    pub fn registered_ids(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn set_key<T: Send + Sync + 'static>(
        &self,
        key: DependencyKey<T>,
        handle: &ContextHandle<T>,
    ) -> Result<SetOutcome, ContextError> {
        self.set(key.id(), handle)
    }

    pub fn get_key<T: Send + Sync + 'static>(
        &self,
        key: DependencyKey<T>,
    ) -> Result<Option<ContextHandle<T>>, ContextError> {
        self.get(key.id())
    }

    pub fn create_key<T: Send + Sync + 'static>(
        &self,
        key: DependencyKey<T>,
        default: T,
    ) -> Result<ContextHandle<T>, ContextError> {
        self.create_context(key.id(), default)
    }

    pub fn remove_key<T>(&self, key: DependencyKey<T>) -> bool {
        self.remove(key.id())
    }
}

impl Default for ContextRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_identifier(id: &str) -> Result<(), ContextError> {
    if id.is_empty() {
        return Err(ContextError::EmptyIdentifier);
    }
    Ok(())
}

static GLOBAL: OnceLock<ContextRegistry> = OnceLock::new();

/// Create the process-wide registry. Call once at startup.
///
/// Later calls return the registry created by the first call; their config is
/// ignored.
pub fn init_global(config: &RegistryConfig) -> &'static ContextRegistry {
    let mut created = false;
    let registry = GLOBAL.get_or_init(|| {
        created = true;
        ContextRegistry::from_config(config)
    });
    if created {
        debug!(policy = ?registry.policy(), "Initialized global dependency registry");
    } else {
        debug!("Global dependency registry already initialized");
    }
    registry
}

/// The process-wide registry created by [`init_global`]
pub fn global() -> Result<&'static ContextRegistry, ContextError> {
    GLOBAL.get().ok_or(ContextError::RegistryUninitialized)
}
