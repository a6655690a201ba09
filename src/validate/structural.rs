//! Structural validation rules (V001–V008).

use std::collections::HashSet;

use serde_json::Value;

use super::ValidationError;
use crate::catalog::ComponentType;
use crate::wire::expr;

/// Run all structural rules. Returns all errors found.
pub fn validate_structural(doc: &Value) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    v001_name_present(doc, &mut errors);
    v002_screens_present(doc, &mut errors);
    v003_screen_ids_and_titles(doc, &mut errors);
    v004_unique_screen_ids(doc, &mut errors);
    v005_unique_component_ids(doc, &mut errors);
    v006_navigation_targets_resolve(doc, &mut errors);
    v007_condition_subjects_resolve(doc, &mut errors);
    v008_known_component_types(doc, &mut errors);

    errors
}

// ---------------------------------------------------------------------------
// Shared JSON accessors (also used by the reachability rules)
// ---------------------------------------------------------------------------

pub(crate) fn screens(doc: &Value) -> &[Value] {
    doc.get("screens")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub(crate) fn screen_id(screen: &Value) -> Option<&str> {
    screen.get("id").and_then(Value::as_str).filter(|id| !id.is_empty())
}

/// Display label for a screen: its id, or its position when it has none.
pub(crate) fn screen_label(screen: &Value, index: usize) -> String {
    match screen_id(screen) {
        Some(id) => format!("'{id}'"),
        None => format!("#{}", index + 1),
    }
}

pub(crate) fn children(screen: &Value) -> &[Value] {
    screen
        .pointer("/layout/children")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Depth-first visit over a screen's components, including the children
/// nested under `then`/`else`/`cases` branches.
pub(crate) fn visit_components<'a, F>(components: &'a [Value], f: &mut F)
where
    F: FnMut(&'a Value),
{
    for component in components {
        f(component);
        for branch in ["then", "else"] {
            if let Some(nested) = component.get(branch).and_then(Value::as_array) {
                visit_components(nested, f);
            }
        }
        if let Some(cases) = component.get("cases").and_then(Value::as_array) {
            for case in cases {
                if let Some(nested) = case.get("children").and_then(Value::as_array) {
                    visit_components(nested, f);
                }
            }
        }
    }
}

pub(crate) fn component_type(component: &Value) -> Option<&str> {
    component.get("type").and_then(Value::as_str)
}

pub(crate) fn component_name(component: &Value) -> Option<&str> {
    component.get("name").and_then(Value::as_str).filter(|n| !n.is_empty())
}

/// All click actions carried by a component (its own plus per-item ones on
/// navigation lists).
pub(crate) fn actions_of(component: &Value) -> Vec<&Value> {
    let mut actions = Vec::new();
    if let Some(action) = component.get("on-click-action") {
        actions.push(action);
    }
    if let Some(items) = component.get("list-items").and_then(Value::as_array) {
        for item in items {
            if let Some(action) = item.get("on-click-action") {
                actions.push(action);
            }
        }
    }
    actions
}

pub(crate) fn action_target(action: &Value) -> Option<&str> {
    if action.get("name").and_then(Value::as_str) != Some("navigate") {
        return None;
    }
    action.pointer("/next/name").and_then(Value::as_str)
}

pub(crate) fn action_completes(action: &Value) -> bool {
    action.get("name").and_then(Value::as_str) == Some("complete")
}

/// Ids of all named (non-footer) components on a screen, branches included.
fn component_names(screen: &Value) -> HashSet<&str> {
    let mut names = HashSet::new();
    visit_components(children(screen), &mut |component| {
        if component_type(component) != Some("Footer") {
            if let Some(name) = component_name(component) {
                names.insert(name);
            }
        }
    });
    names
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

fn v001_name_present(doc: &Value, errors: &mut Vec<ValidationError>) {
    let name = doc.get("name").and_then(Value::as_str).unwrap_or("");
    if name.is_empty() {
        errors.push(ValidationError::flow("V001", "flow name is missing or empty"));
    }
}

fn v002_screens_present(doc: &Value, errors: &mut Vec<ValidationError>) {
    if screens(doc).is_empty() {
        errors.push(ValidationError::flow("V002", "flow has no screens"));
    }
}

fn v003_screen_ids_and_titles(doc: &Value, errors: &mut Vec<ValidationError>) {
    for (index, screen) in screens(doc).iter().enumerate() {
        let label = screen_label(screen, index);
        if screen_id(screen).is_none() {
            errors.push(ValidationError::flow(
                "V003",
                format!("screen {label} has an empty id"),
            ));
        }
        let title = screen.get("title").and_then(Value::as_str).unwrap_or("");
        if title.is_empty() {
            errors.push(ValidationError::flow(
                "V003",
                format!("screen {label} has an empty title"),
            ));
        }
    }
}

fn v004_unique_screen_ids(doc: &Value, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for screen in screens(doc) {
        if let Some(id) = screen_id(screen) {
            if !seen.insert(id) {
                errors.push(ValidationError::screen(
                    "V004",
                    id,
                    format!("duplicate screen id '{id}'"),
                ));
            }
        }
    }
}

fn v005_unique_component_ids(doc: &Value, errors: &mut Vec<ValidationError>) {
    for (index, screen) in screens(doc).iter().enumerate() {
        let label = screen_label(screen, index);
        let sid = screen_id(screen).unwrap_or("");
        let mut seen = HashSet::new();
        visit_components(children(screen), &mut |component| {
            if component_type(component) == Some("Footer") {
                return;
            }
            match component_name(component) {
                Some(name) => {
                    if !seen.insert(name) {
                        errors.push(ValidationError::component(
                            "V005",
                            sid,
                            name,
                            format!("screen {label}: duplicate component id '{name}'"),
                        ));
                    }
                }
                None => {
                    let ty = component_type(component).unwrap_or("unknown");
                    errors.push(ValidationError::screen(
                        "V005",
                        sid,
                        format!("screen {label}: component of type '{ty}' has no id"),
                    ));
                }
            }
        });
    }
}

fn v006_navigation_targets_resolve(doc: &Value, errors: &mut Vec<ValidationError>) {
    let ids: HashSet<&str> = screens(doc).iter().filter_map(screen_id).collect();
    for (index, screen) in screens(doc).iter().enumerate() {
        let label = screen_label(screen, index);
        let sid = screen_id(screen).unwrap_or("");
        visit_components(children(screen), &mut |component| {
            for action in actions_of(component) {
                if let Some(target) = action_target(action) {
                    if !ids.contains(target) {
                        let cid = component_name(component).unwrap_or("");
                        errors.push(ValidationError::component(
                            "V006",
                            sid,
                            cid,
                            format!(
                                "screen {label}: navigation action targets unknown screen '{target}'"
                            ),
                        ));
                    }
                }
            }
        });
    }
}

fn v007_condition_subjects_resolve(doc: &Value, errors: &mut Vec<ValidationError>) {
    for (index, screen) in screens(doc).iter().enumerate() {
        let label = screen_label(screen, index);
        let sid = screen_id(screen).unwrap_or("");
        let names = component_names(screen);
        visit_components(children(screen), &mut |component| {
            let cid = component_name(component).unwrap_or("");
            match component_type(component) {
                Some("If") => {
                    let raw = component.get("condition").and_then(Value::as_str).unwrap_or("");
                    match expr::parse_condition_expr(raw) {
                        Some(condition) => {
                            if !names.contains(condition.subject.as_str()) {
                                errors.push(ValidationError::component(
                                    "V007",
                                    sid,
                                    cid,
                                    format!(
                                        "screen {label}: if component references unknown component '{}'",
                                        condition.subject
                                    ),
                                ));
                            }
                        }
                        None => {
                            errors.push(ValidationError::component(
                                "V007",
                                sid,
                                cid,
                                format!(
                                    "screen {label}: component '{cid}' has an unparseable condition '{raw}'"
                                ),
                            ));
                        }
                    }
                }
                Some("Switch") => {
                    let raw = component.get("value").and_then(Value::as_str).unwrap_or("");
                    match expr::parse_form_ref(raw) {
                        Some(subject) => {
                            if !names.contains(subject) {
                                errors.push(ValidationError::component(
                                    "V007",
                                    sid,
                                    cid,
                                    format!(
                                        "screen {label}: switch component references unknown component '{subject}'"
                                    ),
                                ));
                            }
                        }
                        None => {
                            errors.push(ValidationError::component(
                                "V007",
                                sid,
                                cid,
                                format!(
                                    "screen {label}: component '{cid}' has an unparseable subject '{raw}'"
                                ),
                            ));
                        }
                    }
                }
                _ => {}
            }
        });
    }
}

fn v008_known_component_types(doc: &Value, errors: &mut Vec<ValidationError>) {
    for (index, screen) in screens(doc).iter().enumerate() {
        let label = screen_label(screen, index);
        let sid = screen_id(screen).unwrap_or("");
        visit_components(children(screen), &mut |component| {
            match component_type(component) {
                None => {
                    errors.push(ValidationError::screen(
                        "V008",
                        sid,
                        format!("screen {label}: component without a type"),
                    ));
                }
                Some("Footer") => {}
                Some(ty) => {
                    if ComponentType::from_wire_name(ty).is_none() {
                        errors.push(ValidationError::screen(
                            "V008",
                            sid,
                            format!("screen {label}: unknown component type '{ty}'"),
                        ));
                    }
                }
            }
        });
    }
}
