//! Serialization phase: Flow document → wire JSON.
//!
//! A pure transform with no I/O. Output is deterministic: child order comes
//! from the document, every derived map is a `BTreeMap`, so serializing the
//! same document twice yields byte-identical JSON. Documents that violate
//! the data-model invariants are rejected up front with `MalformedDocument`
//! instead of producing wire JSON the platform would bounce with an opaque
//! error.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::document::*;
use crate::error::FlowError;
use crate::wire::*;
use crate::wire::expr;

pub fn serialize(flow: &Flow) -> Result<WireFlow, FlowError> {
    if flow.name.is_empty() {
        return Err(FlowError::document("flow name is empty"));
    }
    if flow.screens.is_empty() {
        return Err(FlowError::document("flow has no screens"));
    }

    let categories = if flow.categories.is_empty() {
        vec![DEFAULT_CATEGORY.to_string()]
    } else {
        flow.categories.clone()
    };

    let screens = flow
        .screens
        .iter()
        .map(serialize_screen)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WireFlow {
        version: FLOW_JSON_VERSION.to_string(),
        name: Some(flow.name.clone()),
        categories: Some(categories),
        screens,
        routing_model: Some(routing_model(flow)),
    })
}

/// Canonical byte form of the wire JSON, suitable for storage and diffing.
pub fn serialize_to_string(flow: &Flow) -> Result<String, FlowError> {
    Ok(serde_json::to_string(&serialize(flow)?)?)
}

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

fn serialize_screen(screen: &Screen) -> Result<WireScreen, FlowError> {
    let mut by_id: HashMap<&str, &Component> = HashMap::new();
    for component in &screen.components {
        if by_id.insert(component.id.as_str(), component).is_some() {
            return Err(FlowError::document(format!(
                "screen '{}': duplicate component id '{}'",
                screen.id, component.id
            )));
        }
    }

    // Each component may be claimed by at most one branch.
    let mut claimed: HashMap<&str, &str> = HashMap::new();
    for component in &screen.components {
        for reference in component.branch_refs() {
            if !by_id.contains_key(reference) {
                return Err(FlowError::document(format!(
                    "screen '{}': branch of '{}' references missing component '{}'",
                    screen.id, component.id, reference
                )));
            }
            if let Some(previous) = claimed.insert(reference, component.id.as_str()) {
                return Err(FlowError::document(format!(
                    "screen '{}': component '{}' is claimed by both '{}' and '{}'",
                    screen.id, reference, previous, component.id
                )));
            }
        }
    }

    let mut emitted: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = Vec::new();
    let mut children = Vec::new();
    for component in &screen.components {
        if claimed.contains_key(component.id.as_str()) {
            continue;
        }
        children.push(serialize_component(
            component,
            screen,
            &by_id,
            &mut emitted,
            &mut stack,
        )?);
    }

    if emitted.len() != screen.components.len() {
        let mut unreached: Vec<&str> = screen
            .components
            .iter()
            .map(|c| c.id.as_str())
            .filter(|id| !emitted.contains(id))
            .collect();
        unreached.sort_unstable();
        return Err(FlowError::document(format!(
            "screen '{}': branch references form a cycle through {}",
            screen.id,
            unreached.join(", ")
        )));
    }

    if let Some(footer) = &screen.footer {
        children.push(WireComponent::Footer(WireFooter {
            label: footer.label.clone(),
            on_click_action: wire_action(&footer.action),
        }));
    }

    Ok(WireScreen {
        id: screen.id.clone(),
        title: screen.title.clone(),
        terminal: screen_is_terminal(screen).then_some(true),
        layout: WireLayout {
            layout_type: SINGLE_COLUMN_LAYOUT.to_string(),
            children,
        },
    })
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

fn serialize_component<'a>(
    component: &'a Component,
    screen: &'a Screen,
    by_id: &HashMap<&'a str, &'a Component>,
    emitted: &mut HashSet<&'a str>,
    stack: &mut Vec<&'a str>,
) -> Result<WireComponent, FlowError> {
    emitted.insert(component.id.as_str());
    let name = component.id.clone();
    let label = component.title.clone();

    let wire = match &component.kind {
        ComponentKind::TextInput(p) => WireComponent::TextInput(WireTextInput {
            name,
            label,
            input_type: p.input_type,
            required: p.required,
            helper_text: p.helper_text.clone(),
        }),
        ComponentKind::DatePicker(p) => WireComponent::DatePicker(WireDatePicker {
            name,
            label,
            min_date: p.min_date.clone(),
            max_date: p.max_date.clone(),
            required: p.required,
        }),
        ComponentKind::CalendarPicker(p) => WireComponent::CalendarPicker(WireCalendarPicker {
            name,
            label,
            mode: p.mode,
            required: p.required,
        }),
        ComponentKind::TimePicker(p) => WireComponent::TimePicker(WireTimePicker {
            name,
            label,
            min_time: p.min_time.clone(),
            max_time: p.max_time.clone(),
            required: p.required,
        }),
        ComponentKind::Select(p) => WireComponent::Dropdown(WireDropdown {
            name,
            label,
            data_source: p.options.clone(),
            required: p.required,
        }),
        ComponentKind::Checkbox(p) => WireComponent::CheckboxGroup(WireCheckboxGroup {
            name,
            label,
            data_source: p.options.clone(),
            min_selected_items: p.min_selected,
            max_selected_items: p.max_selected,
            required: p.required,
        }),
        ComponentKind::Radio(p) => WireComponent::RadioButtonsGroup(WireRadioButtonsGroup {
            name,
            label,
            data_source: p.options.clone(),
            required: p.required,
        }),
        ComponentKind::ChipsSelector(p) => WireComponent::ChipsSelector(WireChipsSelector {
            name,
            label,
            data_source: p.options.clone(),
            max_selected_items: p.max_selected,
        }),
        ComponentKind::Image(p) => WireComponent::Image(WireImage {
            name,
            label,
            src: p.src.clone(),
            alt_text: p.alt_text.clone(),
            width: p.width,
            height: p.height,
            scale_type: p.scale_type,
        }),
        ComponentKind::ImageCarousel(p) => WireComponent::ImageCarousel(WireImageCarousel {
            name,
            label,
            images: p
                .images
                .iter()
                .map(|i| WireCarouselImage {
                    src: i.src.clone(),
                    alt_text: i.alt_text.clone(),
                })
                .collect(),
        }),
        ComponentKind::PhotoPicker(p) => WireComponent::PhotoPicker(WirePhotoPicker {
            name,
            label,
            description: p.description.clone(),
            min_uploaded_photos: p.min_photos,
            max_uploaded_photos: p.max_photos,
        }),
        ComponentKind::DocumentPicker(p) => WireComponent::DocumentPicker(WireDocumentPicker {
            name,
            label,
            description: p.description.clone(),
            min_uploaded_documents: p.min_documents,
            max_uploaded_documents: p.max_documents,
        }),
        ComponentKind::EmbeddedLink(p) => WireComponent::EmbeddedLink(WireEmbeddedLink {
            name,
            label,
            text: p.text.clone(),
            on_click_action: p.on_click.as_ref().map(wire_action),
        }),
        ComponentKind::OptIn(p) => WireComponent::OptIn(WireOptIn {
            name,
            label,
            required: p.required,
            on_click_action: p.on_click.as_ref().map(wire_action),
        }),
        ComponentKind::If(p) => {
            enter_branch(component, screen, stack)?;
            let then = serialize_refs(&p.then_refs, component, screen, by_id, emitted, stack)?;
            let else_children =
                serialize_refs(&p.else_refs, component, screen, by_id, emitted, stack)?;
            stack.pop();
            WireComponent::If(WireIf {
                name,
                label,
                condition: expr::condition_expr(&p.condition),
                then,
                else_branch: (!else_children.is_empty()).then_some(else_children),
            })
        }
        ComponentKind::Switch(p) => {
            enter_branch(component, screen, stack)?;
            let mut cases = Vec::with_capacity(p.cases.len());
            for case in &p.cases {
                cases.push(WireSwitchCase {
                    value: case.value.clone(),
                    children: serialize_refs(
                        &case.refs, component, screen, by_id, emitted, stack,
                    )?,
                });
            }
            stack.pop();
            WireComponent::Switch(WireSwitch {
                name,
                label,
                value: expr::form_ref(&p.subject),
                cases,
            })
        }
        ComponentKind::NavigationList(p) => WireComponent::NavigationList(WireNavigationList {
            name,
            label,
            list_items: p
                .items
                .iter()
                .map(|item| WireNavigationItem {
                    id: item.id.clone(),
                    main_content: WireMainContent {
                        title: item.title.clone(),
                        description: item.description.clone(),
                    },
                    on_click_action: WireAction::navigate(item.target.clone()),
                })
                .collect(),
        }),
        ComponentKind::RichText(p) => WireComponent::RichText(WireRichText {
            name,
            label,
            text: p.text.clone(),
        }),
    };

    Ok(wire)
}

fn enter_branch<'a>(
    component: &'a Component,
    screen: &Screen,
    stack: &mut Vec<&'a str>,
) -> Result<(), FlowError> {
    if stack.contains(&component.id.as_str()) {
        return Err(FlowError::document(format!(
            "screen '{}': component '{}' is nested inside its own branch",
            screen.id, component.id
        )));
    }
    stack.push(component.id.as_str());
    Ok(())
}

fn serialize_refs<'a>(
    refs: &[String],
    owner: &Component,
    screen: &'a Screen,
    by_id: &HashMap<&'a str, &'a Component>,
    emitted: &mut HashSet<&'a str>,
    stack: &mut Vec<&'a str>,
) -> Result<Vec<WireComponent>, FlowError> {
    refs.iter()
        .map(|reference| {
            let component = by_id.get(reference.as_str()).copied().ok_or_else(|| {
                FlowError::document(format!(
                    "screen '{}': branch of '{}' references missing component '{}'",
                    screen.id, owner.id, reference
                ))
            })?;
            serialize_component(component, screen, by_id, emitted, stack)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Derived data
// ---------------------------------------------------------------------------

fn wire_action(action: &NavAction) -> WireAction {
    match action {
        NavAction::Navigate { screen } => WireAction::navigate(screen.clone()),
        NavAction::Complete => WireAction::Complete,
    }
}

/// A screen is terminal when any of its actions completes the flow.
fn screen_is_terminal(screen: &Screen) -> bool {
    if matches!(
        screen.footer,
        Some(Footer {
            action: NavAction::Complete,
            ..
        })
    ) {
        return true;
    }
    screen.components.iter().any(|c| {
        matches!(
            &c.kind,
            ComponentKind::EmbeddedLink(EmbeddedLinkProps {
                on_click: Some(NavAction::Complete),
                ..
            }) | ComponentKind::OptIn(OptInProps {
                on_click: Some(NavAction::Complete),
                ..
            })
        )
    })
}

/// Per-screen navigation targets, sorted and deduplicated.
fn routing_model(flow: &Flow) -> BTreeMap<String, Vec<String>> {
    flow.screens
        .iter()
        .map(|screen| {
            let mut targets = BTreeSet::new();
            if let Some(Footer {
                action: NavAction::Navigate { screen: target },
                ..
            }) = &screen.footer
            {
                targets.insert(target.clone());
            }
            for component in &screen.components {
                match &component.kind {
                    ComponentKind::EmbeddedLink(EmbeddedLinkProps {
                        on_click: Some(NavAction::Navigate { screen: target }),
                        ..
                    })
                    | ComponentKind::OptIn(OptInProps {
                        on_click: Some(NavAction::Navigate { screen: target }),
                        ..
                    }) => {
                        targets.insert(target.clone());
                    }
                    ComponentKind::NavigationList(p) => {
                        targets.extend(p.items.iter().map(|i| i.target.clone()));
                    }
                    _ => {}
                }
            }
            (screen.id.clone(), targets.into_iter().collect())
        })
        .collect()
}
