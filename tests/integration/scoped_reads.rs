use depslot::{
    provide, use_dependency, use_dependency_safe, ContextError, ContextRegistry, Injector,
    Provider,
};

#[derive(Debug, Clone, PartialEq)]
struct Svc {
    count: i64,
}

fn registry_with_svc() -> ContextRegistry {
    let registry = ContextRegistry::new();
    registry.create_context("svc", Svc { count: 0 }).unwrap();
    registry
}

#[test]
fn descendant_reads_provided_value_and_sibling_falls_back() {
    let registry = registry_with_svc();

    let inside = provide(&registry, "svc", Svc { count: 5 }, || {
        use_dependency::<Svc>(&registry, "svc").unwrap()
    });
    assert_eq!(*inside, Svc { count: 5 });

    let sibling = use_dependency_safe(&registry, "svc", Svc { count: -1 });
    assert_eq!(*sibling, Svc { count: -1 });
}

#[test]
fn sibling_under_outer_provider_reads_outer_value() {
    let registry = registry_with_svc();

    provide(&registry, "svc", Svc { count: 1 }, || {
        let inner = provide(&registry, "svc", Svc { count: 5 }, || {
            use_dependency::<Svc>(&registry, "svc").unwrap()
        });
        assert_eq!(inner.count, 5);

        let sibling = use_dependency_safe(&registry, "svc", Svc { count: -1 });
        assert_eq!(sibling.count, 1);
    });
}

#[test]
fn unsupplied_and_unregistered_are_distinct() {
    let registry = registry_with_svc();
    assert_eq!(
        use_dependency::<Svc>(&registry, "svc").unwrap_err(),
        ContextError::NotProvided {
            id: "svc".to_string()
        }
    );
    assert_eq!(
        use_dependency::<Svc>(&registry, "other").unwrap_err(),
        ContextError::NotRegistered {
            id: "other".to_string()
        }
    );
}

#[test]
fn providers_for_different_ids_compose() {
    let registry = registry_with_svc();
    registry
        .create_context("label", "default".to_string())
        .unwrap();

    Provider::new("svc", Svc { count: 2 }).render(&registry, || {
        Provider::new("label", "inner".to_string()).render(&registry, || {
            assert_eq!(use_dependency::<Svc>(&registry, "svc").unwrap().count, 2);
            assert_eq!(
                use_dependency::<String>(&registry, "label").unwrap().as_str(),
                "inner"
            );
        });
    });
}

#[test]
fn provider_for_unknown_id_still_renders() {
    let registry = ContextRegistry::new();
    let rendered = provide(&registry, "ghost", Svc { count: 3 }, || {
        use_dependency::<Svc>(&registry, "ghost").is_err()
    });
    assert!(rendered);
}

#[test]
fn removed_identifier_stops_resolving() {
    let registry = registry_with_svc();
    assert!(registry.remove("svc"));
    let result = provide(&registry, "svc", Svc { count: 5 }, || {
        use_dependency::<Svc>(&registry, "svc")
    });
    assert!(matches!(result, Err(ContextError::NotRegistered { .. })));
}

#[test]
fn injector_swaps_implementation() {
    let registry = ContextRegistry::new();
    let injector = Injector::new(Svc { count: 1 });
    injector.register(&registry, "svc").unwrap();
    injector.override_instance(Svc { count: 2 });

    let seen = injector.provide(|| use_dependency::<Svc>(&registry, "svc").unwrap());
    assert_eq!(seen.count, 2);
}
