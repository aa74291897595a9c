//! depslot: Named Dependency Slots
//!
//! A registry mapping string identifiers to context handles, a provider that
//! supplies a value for a named handle over a scope, and accessors that read
//! the nearest supplied value by name. Scopes are lexical and thread-local:
//! a value supplied by [`provide`] is visible to everything `children` calls
//! on the same thread, and nested providers shadow outer ones.
//!
//! ```
//! use depslot::{provide, use_dependency, use_dependency_safe, ContextRegistry};
//!
//! struct Counter { count: i64 }
//!
//! let registry = ContextRegistry::new();
//! registry.create_context("svc", Counter { count: 0 }).unwrap();
//!
//! provide(&registry, "svc", Counter { count: 5 }, || {
//!     let svc = use_dependency::<Counter>(&registry, "svc").unwrap();
//!     assert_eq!(svc.count, 5);
//! });
//!
//! let outside = use_dependency_safe(&registry, "svc", Counter { count: -1 });
//! assert_eq!(outside.count, -1);
//! ```

pub mod accessor;
pub mod config;
pub mod error;
pub mod handle;
pub mod injector;
pub mod logging;
pub mod provider;
pub mod registry;
pub mod scope;
pub mod tooling;
pub mod types;

pub use accessor::{
    use_dependency, use_dependency_or_default, use_dependency_safe, use_key, use_key_safe,
};
pub use error::ContextError;
pub use handle::{AnyHandle, ContextHandle};
pub use injector::Injector;
pub use provider::{provide, provide_key, Provider};
pub use registry::{global, init_global, ContextRegistry, DuplicatePolicy, SetOutcome};
pub use scope::SupplyGuard;
pub use types::{DependencyKey, HandleId};
