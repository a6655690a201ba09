use flow_compiler::document::*;

// =============================================================================
// Component builders
// =============================================================================

pub fn text_input(id: &str, title: &str) -> Component {
    Component {
        id: id.into(),
        title: title.into(),
        kind: ComponentKind::TextInput(TextInputProps {
            input_type: InputType::Text,
            required: true,
            helper_text: None,
        }),
    }
}

pub fn select(id: &str, title: &str, options: &[(&str, &str)]) -> Component {
    Component {
        id: id.into(),
        title: title.into(),
        kind: ComponentKind::Select(SelectProps {
            options: options
                .iter()
                .map(|(oid, otitle)| ListOption {
                    id: (*oid).into(),
                    title: (*otitle).into(),
                })
                .collect(),
            required: true,
        }),
    }
}

pub fn rich_text(id: &str, title: &str, lines: &[&str]) -> Component {
    Component {
        id: id.into(),
        title: title.into(),
        kind: ComponentKind::RichText(RichTextProps {
            text: lines.iter().map(|l| (*l).to_string()).collect(),
        }),
    }
}

pub fn opt_in(id: &str, title: &str, on_click: Option<NavAction>) -> Component {
    Component {
        id: id.into(),
        title: title.into(),
        kind: ComponentKind::OptIn(OptInProps {
            required: false,
            on_click,
        }),
    }
}

pub fn if_component(
    id: &str,
    subject: &str,
    value: &str,
    then_refs: &[&str],
    else_refs: &[&str],
) -> Component {
    Component {
        id: id.into(),
        title: id.into(),
        kind: ComponentKind::If(IfProps {
            condition: Condition {
                subject: subject.into(),
                operator: ConditionOp::Eq,
                value: value.into(),
            },
            then_refs: then_refs.iter().map(|r| (*r).to_string()).collect(),
            else_refs: else_refs.iter().map(|r| (*r).to_string()).collect(),
        }),
    }
}

pub fn switch_component(id: &str, subject: &str, cases: &[(&str, &[&str])]) -> Component {
    Component {
        id: id.into(),
        title: id.into(),
        kind: ComponentKind::Switch(SwitchProps {
            subject: subject.into(),
            cases: cases
                .iter()
                .map(|(value, refs)| SwitchCase {
                    value: (*value).into(),
                    refs: refs.iter().map(|r| (*r).to_string()).collect(),
                })
                .collect(),
        }),
    }
}

pub fn navigation_list(id: &str, title: &str, items: &[(&str, &str, &str)]) -> Component {
    Component {
        id: id.into(),
        title: title.into(),
        kind: ComponentKind::NavigationList(NavigationListProps {
            items: items
                .iter()
                .map(|(iid, ititle, target)| NavigationItem {
                    id: (*iid).into(),
                    title: (*ititle).into(),
                    description: None,
                    target: (*target).into(),
                })
                .collect(),
        }),
    }
}

// =============================================================================
// Screen / flow builders
// =============================================================================

pub fn footer_complete(label: &str) -> Footer {
    Footer {
        label: label.into(),
        action: NavAction::Complete,
    }
}

pub fn footer_navigate(label: &str, target: &str) -> Footer {
    Footer {
        label: label.into(),
        action: NavAction::Navigate {
            screen: target.into(),
        },
    }
}

pub fn screen_with(id: &str, title: &str, components: Vec<Component>, footer: Footer) -> Screen {
    let mut screen = Screen::new(id, title);
    screen.components = components;
    screen.footer = Some(footer);
    screen
}

/// One screen, one text input, a terminal submit action.
pub fn single_screen_flow() -> Flow {
    let mut flow = Flow::new("Lead form");
    flow.add_screen(screen_with(
        "WELCOME",
        "Welcome",
        vec![text_input("name_1", "Name")],
        footer_complete("Submit"),
    ))
    .unwrap();
    flow
}

/// Two screens linked by the first screen's footer.
pub fn two_screen_flow() -> Flow {
    let mut flow = Flow::new("Lead qualification");
    flow.add_screen(screen_with(
        "WELCOME",
        "Welcome",
        vec![
            text_input("full_name", "Full name"),
            select("team_size", "Team size", &[("small", "1-10"), ("large", "11+")]),
        ],
        footer_navigate("Continue", "DETAILS"),
    ))
    .unwrap();
    flow.add_screen(screen_with(
        "DETAILS",
        "Details",
        vec![opt_in("marketing", "Send me updates", None)],
        footer_complete("Submit"),
    ))
    .unwrap();
    flow
}
