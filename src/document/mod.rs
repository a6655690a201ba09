//! Document model: Flow → Screens → Components, with validated mutation
//! operations.
//!
//! The flow exclusively owns its screens; each screen exclusively owns its
//! components. Navigation and condition references are non-owning id lookups
//! and may dangle while editing — the validator flags them at save time,
//! mutation operations never auto-repair them.

pub mod types;

pub use types::*;

use crate::error::FlowError;

/// Category assigned when the editor never picked one.
pub const DEFAULT_CATEGORY: &str = "OTHER";

impl Flow {
    pub fn new(name: impl Into<String>) -> Self {
        Flow {
            name: name.into(),
            categories: vec![DEFAULT_CATEGORY.to_string()],
            screens: Vec::new(),
        }
    }

    pub fn screen(&self, id: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == id)
    }

    pub fn screen_mut(&mut self, id: &str) -> Option<&mut Screen> {
        self.screens.iter_mut().find(|s| s.id == id)
    }

    /// Appends a screen. Screen ids are immutable and unique within a flow.
    pub fn add_screen(&mut self, screen: Screen) -> Result<(), FlowError> {
        if self.screen(&screen.id).is_some() {
            return Err(FlowError::document(format!(
                "duplicate screen id '{}'",
                screen.id
            )));
        }
        self.screens.push(screen);
        Ok(())
    }

    /// Removes a screen and returns it. Navigation references that targeted
    /// it are left in place for the validator to report.
    pub fn remove_screen(&mut self, id: &str) -> Option<Screen> {
        let pos = self.screens.iter().position(|s| s.id == id)?;
        Some(self.screens.remove(pos))
    }
}

impl Screen {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Screen {
            id: id.into(),
            title: title.into(),
            components: Vec::new(),
            footer: None,
        }
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn component_mut(&mut self, id: &str) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    pub fn add_component(&mut self, component: Component) -> Result<(), FlowError> {
        if self.component(&component.id).is_some() {
            return Err(FlowError::document(format!(
                "screen '{}': duplicate component id '{}'",
                self.id, component.id
            )));
        }
        self.components.push(component);
        Ok(())
    }

    /// Removes a component and returns it. Branch/condition references to it
    /// are left dangling for the validator.
    pub fn remove_component(&mut self, id: &str) -> Option<Component> {
        let pos = self.components.iter().position(|c| c.id == id)?;
        Some(self.components.remove(pos))
    }

    pub fn replace_components(&mut self, components: Vec<Component>) {
        self.components = components;
    }
}
