//! Deserialization phase: wire JSON → Flow document.
//!
//! Inverse of `serialize`. Parse failures fail fast with `MalformedJson` —
//! never swallowed into a default empty flow, which would silently discard
//! a user's saved work. Nested control-component branches are re-flattened
//! into the document's reference-based representation: the control component
//! first, its branch children right after it, in branch order.

use serde_json::Value;

use crate::catalog::ComponentType;
use crate::document::*;
use crate::error::FlowError;
use crate::wire::*;
use crate::wire::expr;

/// Parse a wire JSON string and rebuild the editable document. The fallback
/// name is used when the wire JSON carries no non-empty top-level `name`.
pub fn deserialize(json: &str, fallback_name: Option<&str>) -> Result<Flow, FlowError> {
    let value: Value = serde_json::from_str(json)?;
    deserialize_value(value, fallback_name)
}

pub fn deserialize_value(value: Value, fallback_name: Option<&str>) -> Result<Flow, FlowError> {
    check_component_types(&value)?;
    let wire: WireFlow = serde_json::from_value(value)
        .map_err(|e| FlowError::document(format!("wire JSON does not match the flow schema: {e}")))?;
    from_wire(wire, fallback_name)
}

pub fn from_wire(wire: WireFlow, fallback_name: Option<&str>) -> Result<Flow, FlowError> {
    let name = wire
        .name
        .filter(|n| !n.is_empty())
        .or_else(|| fallback_name.map(str::to_string))
        .unwrap_or_default();

    let categories = wire
        .categories
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| vec![DEFAULT_CATEGORY.to_string()]);

    let screens = wire
        .screens
        .into_iter()
        .map(deserialize_screen)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Flow {
        name,
        categories,
        screens,
    })
}

/// Reject unknown component types before the typed parse, so the caller gets
/// `UnknownComponentType` instead of an opaque schema mismatch.
fn check_component_types(doc: &Value) -> Result<(), FlowError> {
    let Some(screens) = doc.get("screens").and_then(Value::as_array) else {
        return Ok(());
    };
    for screen in screens {
        if let Some(children) = screen
            .pointer("/layout/children")
            .and_then(Value::as_array)
        {
            check_children(children)?;
        }
    }
    Ok(())
}

fn check_children(children: &[Value]) -> Result<(), FlowError> {
    for child in children {
        if let Some(ty) = child.get("type").and_then(Value::as_str) {
            if ty != "Footer" && ComponentType::from_wire_name(ty).is_none() {
                return Err(FlowError::UnknownComponentType(ty.to_string()));
            }
        }
        for branch in ["then", "else"] {
            if let Some(nested) = child.get(branch).and_then(Value::as_array) {
                check_children(nested)?;
            }
        }
        if let Some(cases) = child.get("cases").and_then(Value::as_array) {
            for case in cases {
                if let Some(nested) = case.get("children").and_then(Value::as_array) {
                    check_children(nested)?;
                }
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

fn deserialize_screen(wire: WireScreen) -> Result<Screen, FlowError> {
    if wire.layout.layout_type != SINGLE_COLUMN_LAYOUT {
        return Err(FlowError::document(format!(
            "screen '{}': unsupported layout '{}'",
            wire.id, wire.layout.layout_type
        )));
    }

    let mut components = Vec::new();
    let mut footer = None;
    for child in wire.layout.children {
        flatten_child(child, &wire.id, false, &mut components, &mut footer)?;
    }

    Ok(Screen {
        id: wire.id,
        title: wire.title,
        components,
        footer,
    })
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

fn flatten_child(
    child: WireComponent,
    screen_id: &str,
    in_branch: bool,
    out: &mut Vec<Component>,
    footer: &mut Option<Footer>,
) -> Result<(), FlowError> {
    match child {
        WireComponent::Footer(f) => {
            if in_branch {
                return Err(FlowError::document(format!(
                    "screen '{screen_id}': footer cannot appear inside a branch"
                )));
            }
            if footer.is_some() {
                return Err(FlowError::document(format!(
                    "screen '{screen_id}': more than one footer"
                )));
            }
            *footer = Some(Footer {
                label: f.label,
                action: doc_action(f.on_click_action, screen_id)?,
            });
            Ok(())
        }

        WireComponent::If(c) => {
            let WireIf {
                name,
                label,
                condition,
                then,
                else_branch,
            } = c;
            let condition = expr::parse_condition_expr(&condition).ok_or_else(|| {
                FlowError::document(format!(
                    "screen '{screen_id}': component '{name}' has an unparseable condition '{condition}'"
                ))
            })?;
            let else_children = else_branch.unwrap_or_default();
            let then_refs = child_names(&then, screen_id)?;
            let else_refs = child_names(&else_children, screen_id)?;
            out.push(Component {
                id: name,
                title: label,
                kind: ComponentKind::If(IfProps {
                    condition,
                    then_refs,
                    else_refs,
                }),
            });
            for nested in then.into_iter().chain(else_children) {
                flatten_child(nested, screen_id, true, out, footer)?;
            }
            Ok(())
        }

        WireComponent::Switch(c) => {
            let WireSwitch {
                name,
                label,
                value,
                cases,
            } = c;
            let subject = expr::parse_form_ref(&value).ok_or_else(|| {
                FlowError::document(format!(
                    "screen '{screen_id}': component '{name}' has an unparseable subject '{value}'"
                ))
            })?;
            let doc_cases = cases
                .iter()
                .map(|case| {
                    Ok(SwitchCase {
                        value: case.value.clone(),
                        refs: child_names(&case.children, screen_id)?,
                    })
                })
                .collect::<Result<Vec<_>, FlowError>>()?;
            out.push(Component {
                id: name,
                title: label,
                kind: ComponentKind::Switch(SwitchProps {
                    subject: subject.to_string(),
                    cases: doc_cases,
                }),
            });
            for case in cases {
                for nested in case.children {
                    flatten_child(nested, screen_id, true, out, footer)?;
                }
            }
            Ok(())
        }

        other => {
            out.push(leaf_component(other, screen_id)?);
            Ok(())
        }
    }
}

fn child_names(children: &[WireComponent], screen_id: &str) -> Result<Vec<String>, FlowError> {
    children
        .iter()
        .map(|child| {
            child.name().map(str::to_string).ok_or_else(|| {
                FlowError::document(format!(
                    "screen '{screen_id}': footer cannot appear inside a branch"
                ))
            })
        })
        .collect()
}

fn leaf_component(wire: WireComponent, screen_id: &str) -> Result<Component, FlowError> {
    let component = match wire {
        WireComponent::TextInput(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::TextInput(TextInputProps {
                input_type: c.input_type,
                required: c.required,
                helper_text: c.helper_text,
            }),
        },
        WireComponent::DatePicker(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::DatePicker(DatePickerProps {
                min_date: c.min_date,
                max_date: c.max_date,
                required: c.required,
            }),
        },
        WireComponent::CalendarPicker(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::CalendarPicker(CalendarPickerProps {
                mode: c.mode,
                required: c.required,
            }),
        },
        WireComponent::TimePicker(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::TimePicker(TimePickerProps {
                min_time: c.min_time,
                max_time: c.max_time,
                required: c.required,
            }),
        },
        WireComponent::Dropdown(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::Select(SelectProps {
                options: c.data_source,
                required: c.required,
            }),
        },
        WireComponent::CheckboxGroup(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::Checkbox(CheckboxProps {
                options: c.data_source,
                min_selected: c.min_selected_items,
                max_selected: c.max_selected_items,
                required: c.required,
            }),
        },
        WireComponent::RadioButtonsGroup(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::Radio(RadioProps {
                options: c.data_source,
                required: c.required,
            }),
        },
        WireComponent::ChipsSelector(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::ChipsSelector(ChipsSelectorProps {
                options: c.data_source,
                max_selected: c.max_selected_items,
            }),
        },
        WireComponent::Image(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::Image(ImageProps {
                src: c.src,
                alt_text: c.alt_text,
                width: c.width,
                height: c.height,
                scale_type: c.scale_type,
            }),
        },
        WireComponent::ImageCarousel(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::ImageCarousel(ImageCarouselProps {
                images: c
                    .images
                    .into_iter()
                    .map(|i| CarouselImage {
                        src: i.src,
                        alt_text: i.alt_text,
                    })
                    .collect(),
            }),
        },
        WireComponent::PhotoPicker(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::PhotoPicker(PhotoPickerProps {
                description: c.description,
                min_photos: c.min_uploaded_photos,
                max_photos: c.max_uploaded_photos,
            }),
        },
        WireComponent::DocumentPicker(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::DocumentPicker(DocumentPickerProps {
                description: c.description,
                min_documents: c.min_uploaded_documents,
                max_documents: c.max_uploaded_documents,
            }),
        },
        WireComponent::EmbeddedLink(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::EmbeddedLink(EmbeddedLinkProps {
                text: c.text,
                on_click: c
                    .on_click_action
                    .map(|a| doc_action(a, screen_id))
                    .transpose()?,
            }),
        },
        WireComponent::OptIn(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::OptIn(OptInProps {
                required: c.required,
                on_click: c
                    .on_click_action
                    .map(|a| doc_action(a, screen_id))
                    .transpose()?,
            }),
        },
        WireComponent::NavigationList(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::NavigationList(NavigationListProps {
                items: c
                    .list_items
                    .into_iter()
                    .map(|item| {
                        let target = match doc_action(item.on_click_action, screen_id)? {
                            NavAction::Navigate { screen } => screen,
                            NavAction::Complete => {
                                return Err(FlowError::document(format!(
                                    "screen '{screen_id}': navigation list item '{}' must navigate to a screen",
                                    item.id
                                )));
                            }
                        };
                        Ok(NavigationItem {
                            id: item.id,
                            title: item.main_content.title,
                            description: item.main_content.description,
                            target,
                        })
                    })
                    .collect::<Result<Vec<_>, FlowError>>()?,
            }),
        },
        WireComponent::RichText(c) => Component {
            id: c.name,
            title: c.label,
            kind: ComponentKind::RichText(RichTextProps { text: c.text }),
        },
        WireComponent::If(_) | WireComponent::Switch(_) | WireComponent::Footer(_) => {
            unreachable!("handled by flatten_child")
        }
    };
    Ok(component)
}

fn doc_action(action: WireAction, screen_id: &str) -> Result<NavAction, FlowError> {
    match action {
        WireAction::Navigate { next } => {
            if next.next_type != "screen" {
                return Err(FlowError::document(format!(
                    "screen '{screen_id}': unsupported navigation target type '{}'",
                    next.next_type
                )));
            }
            Ok(NavAction::Navigate { screen: next.name })
        }
        WireAction::Complete => Ok(NavAction::Complete),
    }
}
