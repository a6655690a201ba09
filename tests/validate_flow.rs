//! Integration tests for the validation rules (V001–V010).

use serde_json::Value;

use flow_compiler::validate;

fn parse(json: &str) -> Value {
    serde_json::from_str(json).expect("fixture should be valid JSON")
}

#[test]
fn lead_flow_passes() {
    let doc = parse(include_str!("fixtures/lead_flow.json"));
    let report = validate::validate(&doc);
    assert!(report.valid, "expected no errors, got: {:?}", report.errors);
    assert!(report.errors.is_empty());
}

#[test]
fn v001_missing_name() {
    let doc = parse(r#"{"version": "7.1", "screens": []}"#);
    let report = validate::validate(&doc);
    assert!(!report.valid);
    assert!(report.errors.iter().any(|e| e.code == "V001"), "{:?}", report.errors);
}

#[test]
fn v002_no_screens() {
    let doc = parse(r#"{"version": "7.1", "name": "Empty", "screens": []}"#);
    let report = validate::validate(&doc);
    assert!(report.errors.iter().any(|e| e.code == "V002"), "{:?}", report.errors);
}

#[test]
fn v003_empty_screen_title() {
    let doc = parse(
        r#"{
            "version": "7.1",
            "name": "Untitled screen",
            "screens": [{
                "id": "S1",
                "title": "",
                "layout": {"type": "SingleColumnLayout", "children": [
                    {"type": "Footer", "label": "Done", "on-click-action": {"name": "complete"}}
                ]}
            }]
        }"#,
    );
    let report = validate::validate(&doc);
    assert!(report.errors.iter().any(|e| e.code == "V003"), "{:?}", report.errors);
}

#[test]
fn v004_duplicate_screen_ids() {
    let doc = parse(
        r#"{
            "version": "7.1",
            "name": "Twins",
            "screens": [
                {"id": "S1", "title": "One", "layout": {"type": "SingleColumnLayout", "children": [
                    {"type": "Footer", "label": "Done", "on-click-action": {"name": "complete"}}
                ]}},
                {"id": "S1", "title": "Two", "layout": {"type": "SingleColumnLayout", "children": []}}
            ]
        }"#,
    );
    let report = validate::validate(&doc);
    assert!(report.errors.iter().any(|e| e.code == "V004"), "{:?}", report.errors);
}

#[test]
fn v005_duplicate_component_id() {
    let doc = parse(include_str!("fixtures/duplicate_component_id.json"));
    let report = validate::validate(&doc);
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1, "{:?}", report.errors);
    assert_eq!(report.errors[0].code, "V005");
    assert_eq!(report.errors[0].component_id.as_deref(), Some("email"));
}

#[test]
fn v006_dangling_navigation_names_the_target() {
    let doc = parse(include_str!("fixtures/dangling_navigation.json"));
    let report = validate::validate(&doc);
    assert!(!report.valid);
    let error = report
        .errors
        .iter()
        .find(|e| e.code == "V006")
        .expect("should flag the dangling target");
    assert!(
        error.message.contains("REMOVED_SCREEN"),
        "message should name the missing screen: {}",
        error.message
    );
}

#[test]
fn v007_if_condition_subject_missing() {
    let doc = parse(include_str!("fixtures/missing_condition_subject.json"));
    let report = validate::validate(&doc);
    assert!(!report.valid);
    insta::assert_snapshot!(
        report.messages().join("\n"),
        @"screen 'S1': if component references unknown component 'field_x'"
    );
}

#[test]
fn v007_unparseable_condition() {
    let doc = parse(
        r#"{
            "version": "7.1",
            "name": "Bad condition",
            "screens": [{
                "id": "S1",
                "title": "Start",
                "layout": {"type": "SingleColumnLayout", "children": [
                    {"type": "If", "name": "if_1", "label": "if_1", "condition": "field_x is yes", "then": []},
                    {"type": "Footer", "label": "Done", "on-click-action": {"name": "complete"}}
                ]}
            }]
        }"#,
    );
    let report = validate::validate(&doc);
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.code == "V007" && e.message.contains("unparseable")),
        "{:?}",
        report.errors
    );
}

#[test]
fn v008_unknown_component_type() {
    let doc = parse(include_str!("fixtures/unknown_component_type.json"));
    let report = validate::validate(&doc);
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1, "{:?}", report.errors);
    assert_eq!(report.errors[0].code, "V008");
    assert!(report.errors[0].message.contains("HoloProjector"));
}

#[test]
fn v009_unreachable_screen() {
    let doc = parse(include_str!("fixtures/unreachable_screen.json"));
    let report = validate::validate(&doc);
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1, "{:?}", report.errors);
    assert_eq!(report.errors[0].code, "V009");
    assert_eq!(report.errors[0].screen_id.as_deref(), Some("ORPHAN"));
}

#[test]
fn v010_no_terminal_screen() {
    let doc = parse(include_str!("fixtures/no_terminal.json"));
    let report = validate::validate(&doc);
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1, "{:?}", report.errors);
    assert_eq!(report.errors[0].code, "V010");
}

#[test]
fn all_violations_are_reported_at_once() {
    // Missing name, unknown type and a dangling navigation in one document:
    // the report must list every one of them, not stop at the first.
    let doc = parse(
        r#"{
            "version": "7.1",
            "screens": [{
                "id": "S1",
                "title": "Start",
                "layout": {"type": "SingleColumnLayout", "children": [
                    {"type": "Blob", "name": "b1", "label": "b1"},
                    {"type": "Footer", "label": "Go", "on-click-action": {
                        "name": "navigate", "next": {"type": "screen", "name": "NOWHERE"}
                    }}
                ]}
            }]
        }"#,
    );
    let report = validate::validate(&doc);
    for code in ["V001", "V006", "V008", "V010"] {
        assert!(
            report.errors.iter().any(|e| e.code == code),
            "missing {code} in {:?}",
            report.errors
        );
    }
}
