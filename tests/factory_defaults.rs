//! Default factory: collision-free identifiers under churn.

use std::collections::HashSet;

use flow_compiler::catalog::ComponentType;
use flow_compiler::document::Component;
use flow_compiler::error::FlowError;
use flow_compiler::factory::DefaultFactory;

#[test]
fn growing_list_yields_pairwise_distinct_identifiers() {
    let mut factory = DefaultFactory::new();
    let mut components: Vec<Component> = Vec::new();

    for ty in ComponentType::ALL {
        for _ in 0..3 {
            let c = factory.default_component_of(ty, None, &components);
            components.push(c);
        }
    }

    let ids: HashSet<&str> = components.iter().map(|c| c.id.as_str()).collect();
    let titles: HashSet<&str> = components.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(ids.len(), components.len());
    assert_eq!(titles.len(), components.len());
}

#[test]
fn suffix_skips_survivors_after_deletions() {
    let mut factory = DefaultFactory::new();
    let mut components = vec![
        factory.default_component("select", None, &[]).unwrap(), // select_1
    ];
    let second = factory
        .default_component("select", None, &components)
        .unwrap();
    assert_eq!(second.id, "select_2");
    components.push(second);

    // Delete select_1; the next default must NOT resurrect it.
    components.remove(0);
    let third = factory
        .default_component("select", None, &components)
        .unwrap();
    assert_eq!(third.id, "select_3");
}

#[test]
fn collision_against_foreign_ids_is_skipped() {
    // A component list that was loaded, not produced by this factory.
    let mut factory = DefaultFactory::new();
    let existing = vec![Component {
        id: "select_1".into(),
        title: "Select 1".into(),
        kind: flow_compiler::document::ComponentKind::Select(Default::default()),
    }];
    let c = factory.default_component("select", None, &existing).unwrap();
    assert_eq!(c.id, "select_2");
}

#[test]
fn bogus_type_raises_and_produces_nothing() {
    let mut factory = DefaultFactory::new();
    let result = factory.default_component("bogus_type", None, &[]);
    assert!(matches!(
        result,
        Err(FlowError::UnknownComponentType(t)) if t == "bogus_type"
    ));
}

#[test]
fn default_screen_has_no_components() {
    let mut factory = DefaultFactory::new();
    let screen = factory.default_screen(&[]);
    assert_eq!(screen.id, "SCREEN_1");
    assert!(screen.components.is_empty());
    assert!(screen.footer.is_none());
}
