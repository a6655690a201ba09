//! Validation phase over wire-format flow JSON (rules V001–V010).
//!
//! The validator operates on raw `serde_json::Value` so that
//! malformed-but-parseable documents still produce a complete diagnostic
//! list instead of a serde error. It never throws and never stops at the
//! first violation: the editor surfaces every error at once.

pub mod reachability;
pub mod structural;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: &'static str,
    /// Human-readable message naming the offending screen/component path,
    /// suitable for direct display to the editor's user.
    pub message: String,
    pub screen_id: Option<String>,
    pub component_id: Option<String>,
}

impl ValidationError {
    pub fn flow(code: &'static str, message: impl Into<String>) -> Self {
        ValidationError {
            code,
            message: message.into(),
            screen_id: None,
            component_id: None,
        }
    }

    pub fn screen(code: &'static str, screen_id: &str, message: impl Into<String>) -> Self {
        ValidationError {
            code,
            message: message.into(),
            screen_id: Some(screen_id.to_string()),
            component_id: None,
        }
    }

    pub fn component(
        code: &'static str,
        screen_id: &str,
        component_id: &str,
        message: impl Into<String>,
    ) -> Self {
        ValidationError {
            code,
            message: message.into(),
            screen_id: Some(screen_id.to_string()),
            component_id: Some(component_id.to_string()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// The user-facing error strings, in rule order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }
}

/// Validate a wire-format flow document. Returns every violation found.
pub fn validate(doc: &Value) -> ValidationReport {
    let mut errors = structural::validate_structural(doc);
    errors.extend(reachability::validate_reachability(doc));
    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
