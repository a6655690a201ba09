//! Closed catalog of supported component types.
//!
//! Every screen component is one of these types. The enumeration is closed:
//! the factory and deserializer reject anything outside it with
//! `UnknownComponentType` instead of degrading to a blank component, and all
//! per-type dispatch in serialize/deserialize is an exhaustive match so a new
//! type is a compile-time-checked change in every consuming site.

use serde::{Deserialize, Serialize};

use crate::error::FlowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    TextInput,
    DatePicker,
    CalendarPicker,
    TimePicker,
    Select,
    Checkbox,
    Radio,
    ChipsSelector,
    Image,
    ImageCarousel,
    PhotoPicker,
    DocumentPicker,
    EmbeddedLink,
    OptIn,
    If,
    Switch,
    NavigationList,
    RichText,
}

impl ComponentType {
    pub const ALL: [ComponentType; 18] = [
        ComponentType::TextInput,
        ComponentType::DatePicker,
        ComponentType::CalendarPicker,
        ComponentType::TimePicker,
        ComponentType::Select,
        ComponentType::Checkbox,
        ComponentType::Radio,
        ComponentType::ChipsSelector,
        ComponentType::Image,
        ComponentType::ImageCarousel,
        ComponentType::PhotoPicker,
        ComponentType::DocumentPicker,
        ComponentType::EmbeddedLink,
        ComponentType::OptIn,
        ComponentType::If,
        ComponentType::Switch,
        ComponentType::NavigationList,
        ComponentType::RichText,
    ];

    /// The editor-facing type name, also used as the default id prefix.
    pub fn name(&self) -> &'static str {
        match self {
            ComponentType::TextInput => "text_input",
            ComponentType::DatePicker => "date_picker",
            ComponentType::CalendarPicker => "calendar_picker",
            ComponentType::TimePicker => "time_picker",
            ComponentType::Select => "select",
            ComponentType::Checkbox => "checkbox",
            ComponentType::Radio => "radio",
            ComponentType::ChipsSelector => "chips_selector",
            ComponentType::Image => "image",
            ComponentType::ImageCarousel => "image_carousel",
            ComponentType::PhotoPicker => "photo_picker",
            ComponentType::DocumentPicker => "document_picker",
            ComponentType::EmbeddedLink => "embedded_link",
            ComponentType::OptIn => "opt_in",
            ComponentType::If => "if",
            ComponentType::Switch => "switch",
            ComponentType::NavigationList => "navigation_list",
            ComponentType::RichText => "rich_text",
        }
    }

    /// The component type name in the external platform's wire schema.
    pub fn wire_name(&self) -> &'static str {
        match self {
            ComponentType::TextInput => "TextInput",
            ComponentType::DatePicker => "DatePicker",
            ComponentType::CalendarPicker => "CalendarPicker",
            ComponentType::TimePicker => "TimePicker",
            ComponentType::Select => "Dropdown",
            ComponentType::Checkbox => "CheckboxGroup",
            ComponentType::Radio => "RadioButtonsGroup",
            ComponentType::ChipsSelector => "ChipsSelector",
            ComponentType::Image => "Image",
            ComponentType::ImageCarousel => "ImageCarousel",
            ComponentType::PhotoPicker => "PhotoPicker",
            ComponentType::DocumentPicker => "DocumentPicker",
            ComponentType::EmbeddedLink => "EmbeddedLink",
            ComponentType::OptIn => "OptIn",
            ComponentType::If => "If",
            ComponentType::Switch => "Switch",
            ComponentType::NavigationList => "NavigationList",
            ComponentType::RichText => "RichText",
        }
    }

    /// Placeholder title stem used by the default factory.
    pub fn default_title(&self) -> &'static str {
        match self {
            ComponentType::TextInput => "Text input",
            ComponentType::DatePicker => "Date picker",
            ComponentType::CalendarPicker => "Calendar picker",
            ComponentType::TimePicker => "Time picker",
            ComponentType::Select => "Select",
            ComponentType::Checkbox => "Checkbox",
            ComponentType::Radio => "Radio",
            ComponentType::ChipsSelector => "Chips selector",
            ComponentType::Image => "Image",
            ComponentType::ImageCarousel => "Image carousel",
            ComponentType::PhotoPicker => "Photo picker",
            ComponentType::DocumentPicker => "Document picker",
            ComponentType::EmbeddedLink => "Embedded link",
            ComponentType::OptIn => "Opt-in",
            ComponentType::If => "If",
            ComponentType::Switch => "Switch",
            ComponentType::NavigationList => "Navigation list",
            ComponentType::RichText => "Rich text",
        }
    }

    /// Control components carry branching logic instead of end-user content.
    pub fn is_control(&self) -> bool {
        matches!(self, ComponentType::If | ComponentType::Switch)
    }

    pub fn from_name(name: &str) -> Result<Self, FlowError> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == name)
            .ok_or_else(|| FlowError::UnknownComponentType(name.to_string()))
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.wire_name() == name)
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for ty in ComponentType::ALL {
            assert_eq!(ComponentType::from_name(ty.name()).unwrap(), ty);
            assert_eq!(ComponentType::from_wire_name(ty.wire_name()), Some(ty));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = ComponentType::from_name("bogus_type").unwrap_err();
        assert!(matches!(err, FlowError::UnknownComponentType(t) if t == "bogus_type"));
    }

    #[test]
    fn only_if_and_switch_are_control() {
        let controls: Vec<_> = ComponentType::ALL
            .iter()
            .filter(|t| t.is_control())
            .collect();
        assert_eq!(controls, [&ComponentType::If, &ComponentType::Switch]);
    }
}
