//! Deserializer behavior: fail-fast parsing, fallback name, defaults,
//! branch re-flattening.

mod helpers;

use helpers::*;

use flow_compiler::deserialize;
use flow_compiler::document::*;
use flow_compiler::error::FlowError;
use flow_compiler::serialize;

#[test]
fn unparseable_json_fails_fast() {
    let err = deserialize::deserialize("{not json", None).unwrap_err();
    assert!(matches!(err, FlowError::MalformedJson(_)), "{err}");
}

#[test]
fn truncated_json_is_not_replaced_with_an_empty_flow() {
    let fixture = include_str!("fixtures/lead_flow.json");
    let truncated = &fixture[..fixture.len() / 2];
    assert!(deserialize::deserialize(truncated, None).is_err());
}

#[test]
fn lead_flow_loads() {
    let flow = deserialize::deserialize(include_str!("fixtures/lead_flow.json"), None).unwrap();
    assert_eq!(flow.name, "Lead qualification");
    assert_eq!(flow.categories, vec!["SIGN_UP".to_string()]);
    assert_eq!(flow.screens.len(), 2);

    let welcome = &flow.screens[0];
    assert_eq!(welcome.components.len(), 3);
    assert_eq!(
        welcome.footer.as_ref().unwrap().action,
        NavAction::Navigate { screen: "DETAILS".into() }
    );

    let details = &flow.screens[1];
    assert_eq!(details.footer.as_ref().unwrap().action, NavAction::Complete);
}

#[test]
fn wire_name_wins_over_fallback() {
    let flow = deserialize::deserialize(
        include_str!("fixtures/lead_flow.json"),
        Some("Record name"),
    )
    .unwrap();
    assert_eq!(flow.name, "Lead qualification");
}

#[test]
fn fallback_name_fills_a_missing_wire_name() {
    let json = r#"{
        "version": "7.1",
        "screens": [{
            "id": "S1",
            "title": "Start",
            "layout": {"type": "SingleColumnLayout", "children": []}
        }]
    }"#;
    let flow = deserialize::deserialize(json, Some("Record name")).unwrap();
    assert_eq!(flow.name, "Record name");
    // Missing categories fall back to the platform default.
    assert_eq!(flow.categories, vec![DEFAULT_CATEGORY.to_string()]);
}

#[test]
fn missing_optional_fields_get_factory_defaults() {
    let json = r#"{
        "version": "7.1",
        "name": "Sparse",
        "screens": [{
            "id": "S1",
            "title": "Start",
            "layout": {"type": "SingleColumnLayout", "children": [
                {"type": "TextInput", "name": "a", "label": "A"},
                {"type": "Dropdown", "name": "b", "label": "B"}
            ]}
        }]
    }"#;
    let flow = deserialize::deserialize(json, None).unwrap();
    let screen = &flow.screens[0];
    assert_eq!(
        screen.components[0].kind,
        ComponentKind::TextInput(TextInputProps::default())
    );
    assert_eq!(
        screen.components[1].kind,
        ComponentKind::Select(SelectProps::default())
    );
}

#[test]
fn unknown_component_type_fails_fast() {
    let err =
        deserialize::deserialize(include_str!("fixtures/unknown_component_type.json"), None)
            .unwrap_err();
    assert!(
        matches!(&err, FlowError::UnknownComponentType(t) if t == "HoloProjector"),
        "{err}"
    );
}

#[test]
fn branches_are_flattened_in_preorder() {
    let mut flow = Flow::new("Plans");
    flow.add_screen(screen_with(
        "PLAN",
        "Pick a plan",
        vec![
            select("plan", "Plan", &[("pro", "Pro"), ("basic", "Basic")]),
            if_component("if_1", "plan", "pro", &["pro_note"], &["basic_note"]),
            rich_text("pro_note", "Pro note", &["Billed yearly."]),
            rich_text("basic_note", "Basic note", &["Free forever."]),
        ],
        footer_complete("Choose"),
    ))
    .unwrap();

    let json = serialize::serialize_to_string(&flow).unwrap();
    let restored = deserialize::deserialize(&json, None).unwrap();

    let ids: Vec<&str> = restored.screens[0]
        .components
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, ["plan", "if_1", "pro_note", "basic_note"]);

    let ComponentKind::If(props) = &restored.screens[0].components[1].kind else {
        panic!("expected if");
    };
    assert_eq!(props.then_refs, vec!["pro_note".to_string()]);
    assert_eq!(props.else_refs, vec!["basic_note".to_string()]);
}

#[test]
fn unparseable_condition_fails_fast() {
    let json = r#"{
        "version": "7.1",
        "name": "Bad",
        "screens": [{
            "id": "S1",
            "title": "Start",
            "layout": {"type": "SingleColumnLayout", "children": [
                {"type": "If", "name": "if_1", "label": "if_1", "condition": "whatever", "then": []}
            ]}
        }]
    }"#;
    let err = deserialize::deserialize(json, None).unwrap_err();
    assert!(matches!(err, FlowError::MalformedDocument(_)), "{err}");
}

#[test]
fn unsupported_layout_is_rejected() {
    let json = r#"{
        "version": "7.1",
        "name": "Bad layout",
        "screens": [{
            "id": "S1",
            "title": "Start",
            "layout": {"type": "GridLayout", "children": []}
        }]
    }"#;
    let err = deserialize::deserialize(json, None).unwrap_err();
    assert!(matches!(err, FlowError::MalformedDocument(_)), "{err}");
}

#[test]
fn footer_inside_a_branch_is_rejected() {
    let json = r#"{
        "version": "7.1",
        "name": "Bad footer",
        "screens": [{
            "id": "S1",
            "title": "Start",
            "layout": {"type": "SingleColumnLayout", "children": [
                {"type": "If", "name": "if_1", "label": "if_1",
                 "condition": "${form.x} == 'yes'",
                 "then": [{"type": "Footer", "label": "Done", "on-click-action": {"name": "complete"}}]}
            ]}
        }]
    }"#;
    let err = deserialize::deserialize(json, None).unwrap_err();
    assert!(matches!(err, FlowError::MalformedDocument(_)), "{err}");
}
