//! Reachability rules (V009–V010) over the screen navigation graph.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use serde_json::Value;

use super::ValidationError;
use super::structural::{
    action_completes, action_target, actions_of, children, screen_id, screens, visit_components,
};

/// Build a directed graph over screens (edges = navigation actions) and
/// check that every screen is reachable from the entry screen and that at
/// least one reachable screen is terminal.
pub fn validate_reachability(doc: &Value) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let screen_list = screens(doc);
    let mut graph: DiGraph<&str, ()> = DiGraph::new();
    let mut indices: HashMap<&str, NodeIndex> = HashMap::new();
    let mut ordered: Vec<(&str, NodeIndex)> = Vec::new();

    for screen in screen_list {
        let Some(id) = screen_id(screen) else { continue };
        if indices.contains_key(id) {
            // Duplicate ids are V004's problem; keep the first node.
            continue;
        }
        let idx = graph.add_node(id);
        indices.insert(id, idx);
        ordered.push((id, idx));
    }

    let Some(&(_, entry)) = ordered.first() else {
        return errors;
    };

    for screen in screen_list {
        let Some(&source) = screen_id(screen).and_then(|id| indices.get(id)) else {
            continue;
        };
        visit_components(children(screen), &mut |component| {
            for action in actions_of(component) {
                if let Some(&target) = action_target(action).and_then(|t| indices.get(t)) {
                    graph.add_edge(source, target, ());
                }
            }
        });
    }

    let mut reachable = HashSet::new();
    let mut bfs = Bfs::new(&graph, entry);
    while let Some(node) = bfs.next(&graph) {
        reachable.insert(node);
    }

    for &(id, idx) in &ordered {
        if !reachable.contains(&idx) {
            errors.push(ValidationError::screen(
                "V009",
                id,
                format!("screen '{id}' is not reachable from the entry screen"),
            ));
        }
    }

    let terminal_reachable = screen_list.iter().any(|screen| {
        screen_id(screen)
            .and_then(|id| indices.get(id))
            .is_some_and(|idx| reachable.contains(idx))
            && screen_is_terminal(screen)
    });
    if !terminal_reachable {
        errors.push(ValidationError::flow(
            "V010",
            "flow has no reachable terminal screen; end users cannot complete it",
        ));
    }

    errors
}

/// A screen is terminal when it is marked so or carries a complete action.
fn screen_is_terminal(screen: &Value) -> bool {
    if screen.get("terminal").and_then(Value::as_bool) == Some(true) {
        return true;
    }
    let mut terminal = false;
    visit_components(children(screen), &mut |component| {
        if actions_of(component).into_iter().any(action_completes) {
            terminal = true;
        }
    });
    terminal
}
