//! Request envelopes for the external flow-hosting API.
//!
//! The builders only assemble bodies; the authenticated transport call is
//! the host application's concern. Categories are fixed at creation time on
//! the external platform, so a category change on a linked flow is rejected
//! locally instead of being sent and bounced remotely.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::DEFAULT_CATEGORY;
use crate::error::FlowError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateFlowRequest {
    pub name: String,
    pub categories: Vec<String>,
    pub flow_json: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateFlowRequest {
    pub flow_json: String,
}

/// Where a flow document stands with respect to the external platform.
/// `Linked` records the categories fixed at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FlowLink {
    LocalDraft,
    Linked {
        flow_id: String,
        categories: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RequestBody {
    Create(CreateFlowRequest),
    Update(UpdateFlowRequest),
}

pub fn build_create_request(
    name: &str,
    categories: &[String],
    wire: &Value,
) -> Result<CreateFlowRequest, FlowError> {
    if name.is_empty() {
        return Err(FlowError::document("flow name is empty"));
    }
    let categories = if categories.is_empty() {
        vec![DEFAULT_CATEGORY.to_string()]
    } else {
        categories.to_vec()
    };
    Ok(CreateFlowRequest {
        name: name.to_string(),
        categories,
        flow_json: serde_json::to_string(wire)?,
    })
}

/// Update carries only the flow JSON. The embedded top-level `name` and
/// `categories` are stripped: the platform treats them as creation-time
/// metadata on the update path.
pub fn build_update_request(wire: &Value) -> Result<UpdateFlowRequest, FlowError> {
    let mut wire = wire.clone();
    if let Some(object) = wire.as_object_mut() {
        object.remove("name");
        object.remove("categories");
    }
    Ok(UpdateFlowRequest {
        flow_json: serde_json::to_string(&wire)?,
    })
}

/// Route a save to the create or update envelope based on link state.
/// Requesting different categories for a linked flow fails with
/// `ImmutableFieldChanged` before any network call is attempted.
pub fn build_save_request(
    link: &FlowLink,
    name: &str,
    categories: &[String],
    wire: &Value,
) -> Result<RequestBody, FlowError> {
    match link {
        FlowLink::LocalDraft => Ok(RequestBody::Create(build_create_request(
            name, categories, wire,
        )?)),
        FlowLink::Linked {
            categories: fixed, ..
        } => {
            if !categories.is_empty() && categories != fixed.as_slice() {
                return Err(FlowError::ImmutableFieldChanged {
                    field: "categories",
                });
            }
            Ok(RequestBody::Update(build_update_request(wire)?))
        }
    }
}
