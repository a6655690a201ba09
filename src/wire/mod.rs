//! Typed model of the external platform's declarative flow JSON.
//!
//! These types are the serde target for the wire format persisted by the
//! host application and sent to the flow-hosting platform. Field names and
//! nesting follow the platform's published schema conventions: PascalCase
//! component types, kebab-case property keys, one `SingleColumnLayout` per
//! screen, and nested `then`/`else`/`cases` branches on control components.

pub mod expr;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::document::{CalendarMode, InputType, ListOption, ScaleType};

/// Fixed schema version marker required by the external format.
pub const FLOW_JSON_VERSION: &str = "7.1";

pub const SINGLE_COLUMN_LAYOUT: &str = "SingleColumnLayout";

// =============================================================================
// TOP-LEVEL WIRE OBJECT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireFlow {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    pub screens: Vec<WireScreen>,
    /// Derived per-screen navigation adjacency, sorted for stable output.
    /// Recomputed on every serialization; ignored on load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_model: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireScreen {
    pub id: String,
    pub title: String,
    /// Derived marker: the screen carries a `complete` action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<bool>,
    pub layout: WireLayout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireLayout {
    #[serde(rename = "type")]
    pub layout_type: String,
    pub children: Vec<WireComponent>,
}

// =============================================================================
// NAVIGATION ACTIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum WireAction {
    Navigate { next: WireNext },
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireNext {
    #[serde(rename = "type")]
    pub next_type: String,
    pub name: String,
}

impl WireAction {
    pub fn navigate(screen: impl Into<String>) -> Self {
        WireAction::Navigate {
            next: WireNext {
                next_type: "screen".to_string(),
                name: screen.into(),
            },
        }
    }

    /// Target screen id for navigate actions.
    pub fn target(&self) -> Option<&str> {
        match self {
            WireAction::Navigate { next } => Some(&next.name),
            WireAction::Complete => None,
        }
    }
}

// =============================================================================
// COMPONENTS — tagged union over the wire schema's type names
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WireComponent {
    TextInput(WireTextInput),
    DatePicker(WireDatePicker),
    CalendarPicker(WireCalendarPicker),
    TimePicker(WireTimePicker),
    Dropdown(WireDropdown),
    CheckboxGroup(WireCheckboxGroup),
    RadioButtonsGroup(WireRadioButtonsGroup),
    ChipsSelector(WireChipsSelector),
    Image(WireImage),
    ImageCarousel(WireImageCarousel),
    PhotoPicker(WirePhotoPicker),
    DocumentPicker(WireDocumentPicker),
    EmbeddedLink(WireEmbeddedLink),
    OptIn(WireOptIn),
    If(WireIf),
    Switch(WireSwitch),
    NavigationList(WireNavigationList),
    RichText(WireRichText),
    Footer(WireFooter),
}

impl WireComponent {
    /// The component id (`name`). `None` for the footer, which is a screen
    /// fixture rather than a named component.
    pub fn name(&self) -> Option<&str> {
        match self {
            WireComponent::TextInput(c) => Some(&c.name),
            WireComponent::DatePicker(c) => Some(&c.name),
            WireComponent::CalendarPicker(c) => Some(&c.name),
            WireComponent::TimePicker(c) => Some(&c.name),
            WireComponent::Dropdown(c) => Some(&c.name),
            WireComponent::CheckboxGroup(c) => Some(&c.name),
            WireComponent::RadioButtonsGroup(c) => Some(&c.name),
            WireComponent::ChipsSelector(c) => Some(&c.name),
            WireComponent::Image(c) => Some(&c.name),
            WireComponent::ImageCarousel(c) => Some(&c.name),
            WireComponent::PhotoPicker(c) => Some(&c.name),
            WireComponent::DocumentPicker(c) => Some(&c.name),
            WireComponent::EmbeddedLink(c) => Some(&c.name),
            WireComponent::OptIn(c) => Some(&c.name),
            WireComponent::If(c) => Some(&c.name),
            WireComponent::Switch(c) => Some(&c.name),
            WireComponent::NavigationList(c) => Some(&c.name),
            WireComponent::RichText(c) => Some(&c.name),
            WireComponent::Footer(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTextInput {
    pub name: String,
    pub label: String,
    #[serde(default, rename = "input-type")]
    pub input_type: InputType,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "helper-text", skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDatePicker {
    pub name: String,
    pub label: String,
    #[serde(rename = "min-date", skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    #[serde(rename = "max-date", skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCalendarPicker {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub mode: CalendarMode,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTimePicker {
    pub name: String,
    pub label: String,
    #[serde(rename = "min-time", skip_serializing_if = "Option::is_none")]
    pub min_time: Option<String>,
    #[serde(rename = "max-time", skip_serializing_if = "Option::is_none")]
    pub max_time: Option<String>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDropdown {
    pub name: String,
    pub label: String,
    #[serde(default, rename = "data-source")]
    pub data_source: Vec<ListOption>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCheckboxGroup {
    pub name: String,
    pub label: String,
    #[serde(default, rename = "data-source")]
    pub data_source: Vec<ListOption>,
    #[serde(rename = "min-selected-items", skip_serializing_if = "Option::is_none")]
    pub min_selected_items: Option<u32>,
    #[serde(rename = "max-selected-items", skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRadioButtonsGroup {
    pub name: String,
    pub label: String,
    #[serde(default, rename = "data-source")]
    pub data_source: Vec<ListOption>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireChipsSelector {
    pub name: String,
    pub label: String,
    #[serde(default, rename = "data-source")]
    pub data_source: Vec<ListOption>,
    #[serde(rename = "max-selected-items", skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireImage {
    pub name: String,
    pub label: String,
    pub src: String,
    #[serde(rename = "alt-text", skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, rename = "scale-type")]
    pub scale_type: ScaleType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireImageCarousel {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub images: Vec<WireCarouselImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCarouselImage {
    pub src: String,
    #[serde(rename = "alt-text", skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WirePhotoPicker {
    pub name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "min-uploaded-photos",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_uploaded_photos: Option<u32>,
    #[serde(
        rename = "max-uploaded-photos",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_uploaded_photos: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDocumentPicker {
    pub name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "min-uploaded-documents",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_uploaded_documents: Option<u32>,
    #[serde(
        rename = "max-uploaded-documents",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_uploaded_documents: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEmbeddedLink {
    pub name: String,
    pub label: String,
    pub text: String,
    #[serde(rename = "on-click-action", skip_serializing_if = "Option::is_none")]
    pub on_click_action: Option<WireAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireOptIn {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "on-click-action", skip_serializing_if = "Option::is_none")]
    pub on_click_action: Option<WireAction>,
}

/// Branches are nested children on the wire, not sibling references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireIf {
    pub name: String,
    pub label: String,
    pub condition: String,
    #[serde(default)]
    pub then: Vec<WireComponent>,
    #[serde(rename = "else", skip_serializing_if = "Option::is_none")]
    pub else_branch: Option<Vec<WireComponent>>,
}

/// Cases are an ordered array so branch evaluation order survives the
/// round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSwitch {
    pub name: String,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub cases: Vec<WireSwitchCase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSwitchCase {
    pub value: String,
    pub children: Vec<WireComponent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireNavigationList {
    pub name: String,
    pub label: String,
    #[serde(default, rename = "list-items")]
    pub list_items: Vec<WireNavigationItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireNavigationItem {
    pub id: String,
    #[serde(rename = "main-content")]
    pub main_content: WireMainContent,
    #[serde(rename = "on-click-action")]
    pub on_click_action: WireAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMainContent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRichText {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub text: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireFooter {
    pub label: String,
    #[serde(rename = "on-click-action")]
    pub on_click_action: WireAction,
}
