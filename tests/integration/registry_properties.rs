use depslot::{ContextHandle, ContextRegistry, DuplicatePolicy, SetOutcome};
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,15}"
}

proptest! {
    #[test]
    fn set_then_get_returns_same_handle(id in identifier(), value in any::<i64>()) {
        let registry = ContextRegistry::new();
        let handle = ContextHandle::new(value);
        registry.set(&id, &handle).unwrap();
        prop_assert_eq!(registry.get::<i64>(&id).unwrap(), Some(handle));
    }

    #[test]
    fn create_context_ignores_second_default(id in identifier(), d1 in any::<u32>(), d2 in any::<u32>()) {
        let registry = ContextRegistry::new();
        let first = registry.create_context(&id, d1).unwrap();
        let second = registry.create_context(&id, d2).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(*second.default_value().unwrap(), d1);
    }

    #[test]
    fn remove_true_exactly_once(ids in proptest::collection::hash_set(identifier(), 1..8)) {
        let registry = ContextRegistry::new();
        for id in &ids {
            registry.create_context(id, 0u8).unwrap();
        }
        for id in &ids {
            prop_assert!(registry.remove(id));
            prop_assert!(!registry.remove(id));
        }
        prop_assert!(registry.is_empty());
    }

    #[test]
    fn clear_empties_everything(ids in proptest::collection::hash_set(identifier(), 0..8)) {
        let registry = ContextRegistry::new();
        for id in &ids {
            registry.create_context(id, id.clone()).unwrap();
        }
        prop_assert_eq!(registry.registered_ids().len(), ids.len());

        registry.clear();
        prop_assert!(registry.registered_ids().is_empty());
        for id in &ids {
            prop_assert!(registry.get::<String>(id).unwrap().is_none());
        }
    }

    #[test]
    fn duplicate_policy_decides_winner(id in identifier(), reject in any::<bool>()) {
        let policy = if reject { DuplicatePolicy::Reject } else { DuplicatePolicy::Overwrite };
        let registry = ContextRegistry::with_policy(policy);
        let first = ContextHandle::new(1u8);
        let second = ContextHandle::new(2u8);

        registry.set(&id, &first).unwrap();
        let outcome = registry.set(&id, &second).unwrap();
        let stored = registry.get::<u8>(&id).unwrap().unwrap();
        if reject {
            prop_assert_eq!(outcome, SetOutcome::Rejected);
            prop_assert_eq!(stored, first);
        } else {
            prop_assert_eq!(outcome, SetOutcome::Replaced);
            prop_assert_eq!(stored, second);
        }
    }
}

#[test]
fn concurrent_create_context_yields_one_handle() {
    use std::sync::Arc;
    use std::thread;

    let registry = Arc::new(ContextRegistry::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.create_context("shared", i as u32).unwrap())
        })
        .collect();

    let results: Vec<ContextHandle<u32>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(registry.len(), 1);
}
