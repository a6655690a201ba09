//! WASM entry points for the dashboard editor.

use wasm_bindgen::prelude::*;

use crate::document::{Component, Flow, Screen};
use crate::error::FlowError;
use crate::factory::DefaultFactory;
use crate::validate::ValidationError;

/// Validate a wire-format flow JSON string.
/// Returns a JSON array of error objects; empty means valid.
#[wasm_bindgen]
pub fn validate_flow(json: &str) -> JsValue {
    let result = validate_flow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_flow_inner(json: &str) -> Vec<ErrorDto> {
    let value: serde_json::Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(e) => return vec![ErrorDto::from(FlowError::from(e))],
    };
    crate::validate::validate(&value)
        .errors
        .into_iter()
        .map(ErrorDto::from)
        .collect()
}

/// Full save pipeline: document JSON → serialize → validate.
/// Returns `{status: "success", flow_json}` or `{status: "errors", errors}`.
#[wasm_bindgen]
pub fn compile_flow(document_json: &str) -> JsValue {
    let result = compile_flow_inner(document_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn compile_flow_inner(document_json: &str) -> CompileResult {
    let flow = match serde_json::from_str::<Flow>(document_json) {
        Ok(f) => f,
        Err(e) => {
            return CompileResult::Errors {
                errors: vec![ErrorDto::from(FlowError::from(e))],
            };
        }
    };

    let wire = match crate::serialize::serialize(&flow) {
        Ok(w) => w,
        Err(e) => {
            return CompileResult::Errors {
                errors: vec![ErrorDto::from(e)],
            };
        }
    };

    let value = match serde_json::to_value(&wire) {
        Ok(v) => v,
        Err(e) => {
            return CompileResult::Errors {
                errors: vec![ErrorDto::from(FlowError::from(e))],
            };
        }
    };
    let report = crate::validate::validate(&value);
    if !report.valid {
        return CompileResult::Errors {
            errors: report.errors.into_iter().map(ErrorDto::from).collect(),
        };
    }

    match crate::serialize::serialize_to_string(&flow) {
        Ok(flow_json) => CompileResult::Success { flow_json },
        Err(e) => CompileResult::Errors {
            errors: vec![ErrorDto::from(e)],
        },
    }
}

/// Rebuild the editable document from stored wire JSON.
/// Returns `{status: "success", document}` or `{status: "errors", errors}`.
#[wasm_bindgen]
pub fn load_flow(json: &str, fallback_name: Option<String>) -> JsValue {
    let result = match crate::deserialize::deserialize(json, fallback_name.as_deref()) {
        Ok(flow) => LoadResult::Success { document: flow },
        Err(e) => LoadResult::Errors {
            errors: vec![ErrorDto::from(e)],
        },
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// New screen with a collision-free id given the current screens JSON.
#[wasm_bindgen]
pub fn default_screen(existing_json: &str) -> JsValue {
    let existing = match serde_json::from_str::<Vec<Screen>>(existing_json) {
        Ok(s) => s,
        Err(e) => {
            return serde_wasm_bindgen::to_value(&vec![ErrorDto::from(FlowError::from(e))])
                .unwrap_or(JsValue::NULL);
        }
    };
    let screen = DefaultFactory::new().default_screen(&existing);
    serde_wasm_bindgen::to_value(&screen).unwrap_or(JsValue::NULL)
}

/// New component of `type_name` with baseline properties and a
/// collision-free id given the current components JSON.
#[wasm_bindgen]
pub fn default_component(type_name: &str, existing_json: &str) -> JsValue {
    let result = default_component_inner(type_name, existing_json);
    match result {
        Ok(component) => serde_wasm_bindgen::to_value(&component).unwrap_or(JsValue::NULL),
        Err(e) => serde_wasm_bindgen::to_value(&vec![ErrorDto::from(e)]).unwrap_or(JsValue::NULL),
    }
}

fn default_component_inner(type_name: &str, existing_json: &str) -> Result<Component, FlowError> {
    let existing: Vec<Component> = serde_json::from_str(existing_json)?;
    DefaultFactory::new().default_component(type_name, None, &existing)
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    message: String,
    screen_id: Option<String>,
    component_id: Option<String>,
}

impl From<FlowError> for ErrorDto {
    fn from(e: FlowError) -> Self {
        ErrorDto {
            code: e.code().to_string(),
            message: e.to_string(),
            screen_id: None,
            component_id: None,
        }
    }
}

impl From<ValidationError> for ErrorDto {
    fn from(e: ValidationError) -> Self {
        ErrorDto {
            code: e.code.to_string(),
            message: e.message,
            screen_id: e.screen_id,
            component_id: e.component_id,
        }
    }
}

#[derive(serde::Serialize)]
#[serde(tag = "status")]
enum CompileResult {
    #[serde(rename = "success")]
    Success { flow_json: String },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}

#[derive(serde::Serialize)]
#[serde(tag = "status")]
enum LoadResult {
    #[serde(rename = "success")]
    Success { document: Flow },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
