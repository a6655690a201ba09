//! Unified error type used across all compiler phases.

use thiserror::Error;

/// Fail-fast errors raised by the factory, serializer, deserializer and
/// request builder. Validation diagnostics are deliberately *not* part of
/// this enum — the validator reports them as a list instead of throwing.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Input to the deserializer is not parseable JSON.
    #[error("malformed flow JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// A document (or wire payload) violates a structural invariant.
    #[error("malformed flow document: {0}")]
    MalformedDocument(String),

    /// A component type outside the closed catalog.
    #[error("unknown component type '{0}'")]
    UnknownComponentType(String),

    /// Attempt to change a field the external platform fixes at creation.
    #[error("field '{field}' cannot change after the flow is created")]
    ImmutableFieldChanged { field: &'static str },
}

impl FlowError {
    pub fn document(message: impl Into<String>) -> Self {
        FlowError::MalformedDocument(message.into())
    }

    /// Stable machine-readable code, used by the WASM boundary DTOs.
    pub fn code(&self) -> &'static str {
        match self {
            FlowError::MalformedJson(_) => "malformed_json",
            FlowError::MalformedDocument(_) => "malformed_document",
            FlowError::UnknownComponentType(_) => "unknown_component_type",
            FlowError::ImmutableFieldChanged { .. } => "immutable_field_changed",
        }
    }
}
