//! Editable in-memory representation of a flow document.
//!
//! These types are the serde target for the editor's document JSON. The
//! document is a plain value type: the editor owns mutation, every compiler
//! phase operates on a caller-supplied snapshot and retains nothing.

use serde::{Deserialize, Serialize};

use crate::catalog::ComponentType;

// =============================================================================
// TOP-LEVEL FLOW
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub name: String,
    pub categories: Vec<String>,
    pub screens: Vec<Screen>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    /// Immutable once created; unique within the flow. Join key for
    /// navigation references.
    pub id: String,
    pub title: String,
    pub components: Vec<Component>,
    /// Terminal "submit"/"continue" action rendered at the bottom of the
    /// screen. Serialized as the screen's trailing `Footer` layout child.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub label: String,
    pub action: NavAction,
}

/// Navigation action attached to a footer, an embedded link, an opt-in or a
/// navigation-list item. Targets are screen ids, never embedded screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavAction {
    Navigate { screen: String },
    Complete,
}

// =============================================================================
// COMPONENT — tagged union over the 18 catalog types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Unique within the owning screen (not globally).
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub kind: ComponentKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ComponentKind {
    #[serde(rename = "text_input")]
    TextInput(TextInputProps),
    #[serde(rename = "date_picker")]
    DatePicker(DatePickerProps),
    #[serde(rename = "calendar_picker")]
    CalendarPicker(CalendarPickerProps),
    #[serde(rename = "time_picker")]
    TimePicker(TimePickerProps),
    #[serde(rename = "select")]
    Select(SelectProps),
    #[serde(rename = "checkbox")]
    Checkbox(CheckboxProps),
    #[serde(rename = "radio")]
    Radio(RadioProps),
    #[serde(rename = "chips_selector")]
    ChipsSelector(ChipsSelectorProps),
    #[serde(rename = "image")]
    Image(ImageProps),
    #[serde(rename = "image_carousel")]
    ImageCarousel(ImageCarouselProps),
    #[serde(rename = "photo_picker")]
    PhotoPicker(PhotoPickerProps),
    #[serde(rename = "document_picker")]
    DocumentPicker(DocumentPickerProps),
    #[serde(rename = "embedded_link")]
    EmbeddedLink(EmbeddedLinkProps),
    #[serde(rename = "opt_in")]
    OptIn(OptInProps),
    #[serde(rename = "if")]
    If(IfProps),
    #[serde(rename = "switch")]
    Switch(SwitchProps),
    #[serde(rename = "navigation_list")]
    NavigationList(NavigationListProps),
    #[serde(rename = "rich_text")]
    RichText(RichTextProps),
}

impl Component {
    pub fn component_type(&self) -> ComponentType {
        match &self.kind {
            ComponentKind::TextInput(_) => ComponentType::TextInput,
            ComponentKind::DatePicker(_) => ComponentType::DatePicker,
            ComponentKind::CalendarPicker(_) => ComponentType::CalendarPicker,
            ComponentKind::TimePicker(_) => ComponentType::TimePicker,
            ComponentKind::Select(_) => ComponentType::Select,
            ComponentKind::Checkbox(_) => ComponentType::Checkbox,
            ComponentKind::Radio(_) => ComponentType::Radio,
            ComponentKind::ChipsSelector(_) => ComponentType::ChipsSelector,
            ComponentKind::Image(_) => ComponentType::Image,
            ComponentKind::ImageCarousel(_) => ComponentType::ImageCarousel,
            ComponentKind::PhotoPicker(_) => ComponentType::PhotoPicker,
            ComponentKind::DocumentPicker(_) => ComponentType::DocumentPicker,
            ComponentKind::EmbeddedLink(_) => ComponentType::EmbeddedLink,
            ComponentKind::OptIn(_) => ComponentType::OptIn,
            ComponentKind::If(_) => ComponentType::If,
            ComponentKind::Switch(_) => ComponentType::Switch,
            ComponentKind::NavigationList(_) => ComponentType::NavigationList,
            ComponentKind::RichText(_) => ComponentType::RichText,
        }
    }

    pub fn is_control(&self) -> bool {
        self.component_type().is_control()
    }

    /// Ids of components claimed by this component's branches, in branch
    /// order. Empty for non-control components.
    pub fn branch_refs(&self) -> Vec<&str> {
        match &self.kind {
            ComponentKind::If(p) => p
                .then_refs
                .iter()
                .chain(p.else_refs.iter())
                .map(String::as_str)
                .collect(),
            ComponentKind::Switch(p) => p
                .cases
                .iter()
                .flat_map(|c| c.refs.iter())
                .map(String::as_str)
                .collect(),
            _ => Vec::new(),
        }
    }
}

// =============================================================================
// SHARED PROPERTY TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOption {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Number,
    Email,
    Password,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMode {
    #[default]
    Single,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    #[default]
    Contain,
    Cover,
}

// =============================================================================
// INPUT COMPONENT PROPERTIES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextInputProps {
    pub input_type: InputType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatePickerProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarPickerProps {
    pub mode: CalendarMode,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimePickerProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_time: Option<String>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectProps {
    pub options: Vec<ListOption>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckboxProps {
    pub options: Vec<ListOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_selected: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selected: Option<u32>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RadioProps {
    pub options: Vec<ListOption>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChipsSelectorProps {
    pub options: Vec<ListOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selected: Option<u32>,
}

// =============================================================================
// DISPLAY COMPONENT PROPERTIES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageProps {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub scale_type: ScaleType,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageCarouselProps {
    pub images: Vec<CarouselImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselImage {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotoPickerProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_photos: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_photos: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentPickerProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_documents: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_documents: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbeddedLinkProps {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<NavAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptInProps {
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<NavAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RichTextProps {
    pub text: Vec<String>,
}

// =============================================================================
// CONTROL COMPONENT PROPERTIES
// =============================================================================

/// Structured condition over a sibling component's submitted value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Id of the component whose value is tested. Must resolve within the
    /// owning screen at validation time; may dangle briefly while editing.
    pub subject: String,
    pub operator: ConditionOp,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionOp {
    #[default]
    Eq,
    Neq,
}

impl ConditionOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            ConditionOp::Eq => "==",
            ConditionOp::Neq => "!=",
        }
    }
}

/// Branches hold *references* to components in the owning screen's flat
/// list. The wire format nests the referenced components as children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IfProps {
    pub condition: Condition,
    pub then_refs: Vec<String>,
    pub else_refs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SwitchProps {
    /// Id of the component whose value selects a case.
    pub subject: String,
    pub cases: Vec<SwitchCase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchCase {
    pub value: String,
    pub refs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationListProps {
    pub items: Vec<NavigationItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Target screen id.
    pub target: String,
}
