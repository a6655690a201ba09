//! Default object factory for the screen editor.
//!
//! Produces new screens and components with collision-free identifiers.
//! Counters are monotonic per factory instance: an identifier handed out
//! once is never produced again, even after deletions open gaps in the
//! existing list.

use std::collections::HashMap;

use crate::catalog::ComponentType;
use crate::document::*;
use crate::error::FlowError;

#[derive(Debug, Default)]
pub struct DefaultFactory {
    screen_seq: u32,
    component_seq: HashMap<ComponentType, u32>,
}

impl DefaultFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh screen with a unique id, a placeholder title and no
    /// components.
    pub fn default_screen(&mut self, existing: &[Screen]) -> Screen {
        let mut n = self.screen_seq + 1;
        let (id, title) = loop {
            let id = format!("SCREEN_{n}");
            let title = format!("Screen {n}");
            if !existing
                .iter()
                .any(|s| s.id.eq_ignore_ascii_case(&id) || s.title.eq_ignore_ascii_case(&title))
            {
                break (id, title);
            }
            n += 1;
        };
        self.screen_seq = n;
        Screen::new(id, title)
    }

    /// A component of the requested type with its baseline properties.
    /// `type_name` must be one of the closed catalog names; anything else
    /// fails with `UnknownComponentType` rather than degrading to a blank
    /// component.
    pub fn default_component(
        &mut self,
        type_name: &str,
        explicit_id: Option<&str>,
        existing: &[Component],
    ) -> Result<Component, FlowError> {
        let ty = ComponentType::from_name(type_name)?;
        Ok(self.default_component_of(ty, explicit_id, existing))
    }

    pub fn default_component_of(
        &mut self,
        ty: ComponentType,
        explicit_id: Option<&str>,
        existing: &[Component],
    ) -> Component {
        let (id, title) = match explicit_id {
            Some(id) => (id.to_string(), id.to_string()),
            None => self.next_identifier(ty, existing),
        };
        Component {
            id,
            title,
            kind: baseline_kind(ty),
        }
    }

    /// Smallest unused suffix such that neither the derived id nor the
    /// derived title collides with an existing id or case-normalized title.
    fn next_identifier(&mut self, ty: ComponentType, existing: &[Component]) -> (String, String) {
        let mut n = self.component_seq.get(&ty).copied().unwrap_or(0) + 1;
        let (id, title) = loop {
            let id = format!("{}_{}", ty.name(), n);
            let title = format!("{} {}", ty.default_title(), n);
            if !collides(&id, existing) && !collides(&title, existing) {
                break (id, title);
            }
            n += 1;
        };
        self.component_seq.insert(ty, n);
        (id, title)
    }
}

fn collides(candidate: &str, existing: &[Component]) -> bool {
    existing.iter().any(|c| {
        c.id.eq_ignore_ascii_case(candidate) || c.title.eq_ignore_ascii_case(candidate)
    })
}

/// Baseline property set for each catalog type.
fn baseline_kind(ty: ComponentType) -> ComponentKind {
    match ty {
        ComponentType::TextInput => ComponentKind::TextInput(TextInputProps::default()),
        ComponentType::DatePicker => ComponentKind::DatePicker(DatePickerProps::default()),
        ComponentType::CalendarPicker => {
            ComponentKind::CalendarPicker(CalendarPickerProps::default())
        }
        ComponentType::TimePicker => ComponentKind::TimePicker(TimePickerProps::default()),
        ComponentType::Select => ComponentKind::Select(SelectProps::default()),
        ComponentType::Checkbox => ComponentKind::Checkbox(CheckboxProps::default()),
        ComponentType::Radio => ComponentKind::Radio(RadioProps::default()),
        ComponentType::ChipsSelector => {
            ComponentKind::ChipsSelector(ChipsSelectorProps::default())
        }
        ComponentType::Image => ComponentKind::Image(ImageProps::default()),
        ComponentType::ImageCarousel => {
            ComponentKind::ImageCarousel(ImageCarouselProps::default())
        }
        ComponentType::PhotoPicker => ComponentKind::PhotoPicker(PhotoPickerProps::default()),
        ComponentType::DocumentPicker => {
            ComponentKind::DocumentPicker(DocumentPickerProps::default())
        }
        ComponentType::EmbeddedLink => ComponentKind::EmbeddedLink(EmbeddedLinkProps::default()),
        ComponentType::OptIn => ComponentKind::OptIn(OptInProps::default()),
        ComponentType::If => ComponentKind::If(IfProps::default()),
        ComponentType::Switch => ComponentKind::Switch(SwitchProps::default()),
        ComponentType::NavigationList => {
            ComponentKind::NavigationList(NavigationListProps::default())
        }
        ComponentType::RichText => ComponentKind::RichText(RichTextProps::default()),
    }
}
