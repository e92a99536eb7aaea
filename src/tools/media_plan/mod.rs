//! Media plan intake: checks the four required fields and echoes a structured plan.
pub mod request;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

pub use request::{MediaPlan, MediaPlanError, MediaPlanField, MediaPlanRequest};

pub const MEDIA_PLAN_TOOL_ID: &str = "create_plan_media";
pub const MEDIA_PLAN_CONFIRMATION: &str = "Here is your structured media plan.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MediaPlanStatus {
    Complete,
    MissingFields,
}

/// Response from `create_plan_media`.
///
/// Missing fields are reported through `error` and `instruction`, never as a tool error.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MediaPlanResponse {
    pub status: MediaPlanStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_plan: Option<MediaPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

impl From<Result<MediaPlan, MediaPlanError>> for MediaPlanResponse {
    fn from(result: Result<MediaPlan, MediaPlanError>) -> Self {
        match result {
            Ok(plan) => Self {
                status: MediaPlanStatus::Complete,
                media_plan: Some(plan),
                message: Some(MEDIA_PLAN_CONFIRMATION.to_string()),
                error: None,
                instruction: None,
            },
            Err(err) => Self {
                status: MediaPlanStatus::MissingFields,
                media_plan: None,
                message: None,
                error: Some(err.to_string()),
                instruction: Some(err.instruction()),
            },
        }
    }
}

/// Core logic for the media plan tool.
pub fn create_plan(request: MediaPlanRequest) -> MediaPlanResponse {
    let result = request.validate();
    match &result {
        Ok(_) => info!(target: "todo_mcp::media_plan", "Media plan complete"),
        Err(MediaPlanError::MissingFields(fields)) => info!(
            target: "todo_mcp::media_plan",
            missing = ?fields.iter().map(MediaPlanField::as_str).collect::<Vec<_>>(),
            "Media plan is missing required fields"
        ),
    }
    MediaPlanResponse::from(result)
}
