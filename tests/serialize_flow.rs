//! Serializer behavior: determinism, preconditions, branch nesting,
//! derived terminal markers and routing model.

mod helpers;

use helpers::*;

use flow_compiler::document::*;
use flow_compiler::error::FlowError;
use flow_compiler::serialize;
use flow_compiler::wire::WireComponent;

#[test]
fn serialization_is_deterministic() {
    let flow = two_screen_flow();
    let first = serialize::serialize_to_string(&flow).unwrap();
    let second = serialize::serialize_to_string(&flow).unwrap();
    assert_eq!(first, second);
}

#[test]
fn minimal_flow_wire_shape() {
    let flow = single_screen_flow();
    let json = serialize::serialize_to_string(&flow).unwrap();
    insta::assert_snapshot!(
        json,
        @r#"{"version":"7.1","name":"Lead form","categories":["OTHER"],"screens":[{"id":"WELCOME","title":"Welcome","terminal":true,"layout":{"type":"SingleColumnLayout","children":[{"type":"TextInput","name":"name_1","label":"Name","input-type":"text","required":true},{"type":"Footer","label":"Submit","on-click-action":{"name":"complete"}}]}}],"routing_model":{"WELCOME":[]}}"#
    );
}

#[test]
fn empty_name_is_rejected() {
    let mut flow = single_screen_flow();
    flow.name.clear();
    let err = serialize::serialize(&flow).unwrap_err();
    assert!(matches!(err, FlowError::MalformedDocument(_)), "{err}");
}

#[test]
fn empty_screens_are_rejected() {
    let flow = Flow::new("No screens yet");
    let err = serialize::serialize(&flow).unwrap_err();
    assert!(matches!(err, FlowError::MalformedDocument(_)), "{err}");
}

#[test]
fn empty_categories_fall_back_to_the_default() {
    let mut flow = single_screen_flow();
    flow.categories.clear();
    let wire = serialize::serialize(&flow).unwrap();
    assert_eq!(wire.categories, Some(vec![DEFAULT_CATEGORY.to_string()]));
}

#[test]
fn branch_children_are_nested_not_siblings() {
    let mut flow = Flow::new("Plans");
    flow.add_screen(screen_with(
        "PLAN",
        "Pick a plan",
        vec![
            select("plan", "Plan", &[("pro", "Pro"), ("basic", "Basic")]),
            if_component("if_1", "plan", "pro", &["pro_note"], &[]),
            rich_text("pro_note", "Pro note", &["Billed yearly."]),
        ],
        footer_complete("Choose"),
    ))
    .unwrap();

    let wire = serialize::serialize(&flow).unwrap();
    let children = &wire.screens[0].layout.children;
    // select, if (owning the nested note), footer — the note is not a sibling.
    assert_eq!(children.len(), 3);
    let WireComponent::If(if_wire) = &children[1] else {
        panic!("expected If at position 1, got {children:?}");
    };
    assert_eq!(if_wire.condition, "${form.plan} == 'pro'");
    assert_eq!(if_wire.then.len(), 1);
    assert!(if_wire.else_branch.is_none());
}

#[test]
fn missing_branch_reference_is_rejected() {
    let mut flow = Flow::new("Broken");
    flow.add_screen(screen_with(
        "S1",
        "Start",
        vec![if_component("if_1", "x", "yes", &["ghost"], &[])],
        footer_complete("Done"),
    ))
    .unwrap();

    let err = serialize::serialize(&flow).unwrap_err();
    let FlowError::MalformedDocument(message) = err else {
        panic!("expected MalformedDocument");
    };
    assert!(message.contains("ghost"), "{message}");
}

#[test]
fn doubly_claimed_component_is_rejected() {
    let mut flow = Flow::new("Broken");
    flow.add_screen(screen_with(
        "S1",
        "Start",
        vec![
            text_input("x", "X"),
            if_component("if_1", "x", "yes", &["note"], &[]),
            if_component("if_2", "x", "no", &["note"], &[]),
            rich_text("note", "Note", &["shared"]),
        ],
        footer_complete("Done"),
    ))
    .unwrap();

    let err = serialize::serialize(&flow).unwrap_err();
    let FlowError::MalformedDocument(message) = err else {
        panic!("expected MalformedDocument");
    };
    assert!(message.contains("'note'"), "{message}");
}

#[test]
fn cyclic_branch_references_are_rejected() {
    let mut flow = Flow::new("Broken");
    flow.add_screen(screen_with(
        "S1",
        "Start",
        vec![
            if_component("if_a", "x", "yes", &["if_b"], &[]),
            if_component("if_b", "x", "no", &["if_a"], &[]),
        ],
        footer_complete("Done"),
    ))
    .unwrap();

    let err = serialize::serialize(&flow).unwrap_err();
    let FlowError::MalformedDocument(message) = err else {
        panic!("expected MalformedDocument");
    };
    assert!(message.contains("cycle"), "{message}");
}

#[test]
fn duplicate_component_ids_are_rejected() {
    let mut flow = Flow::new("Broken");
    let mut screen = Screen::new("S1", "Start");
    screen.components = vec![text_input("email", "Email"), text_input("email", "Email 2")];
    screen.footer = Some(footer_complete("Done"));
    flow.screens.push(screen);

    let err = serialize::serialize(&flow).unwrap_err();
    assert!(matches!(err, FlowError::MalformedDocument(_)), "{err}");
}

#[test]
fn terminal_marker_follows_complete_actions() {
    let flow = two_screen_flow();
    let wire = serialize::serialize(&flow).unwrap();
    assert_eq!(wire.screens[0].terminal, None);
    assert_eq!(wire.screens[1].terminal, Some(true));
}

#[test]
fn routing_model_lists_sorted_targets() {
    let flow = two_screen_flow();
    let wire = serialize::serialize(&flow).unwrap();
    let routing = wire.routing_model.as_ref().unwrap();
    assert_eq!(routing["WELCOME"], vec!["DETAILS".to_string()]);
    assert!(routing["DETAILS"].is_empty());
}
