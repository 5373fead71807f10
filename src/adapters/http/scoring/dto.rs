//! Data Transfer Objects for scoring endpoints.
//!
//! Request bodies are lenient: every field is optional and accepts either a
//! bucket label or a raw number. Other JSON values resolve to defaults.
//! Responses are the domain types themselves, which already serialize in
//! camelCase.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{
    CompareArchitecturesQuery, ComposeVerdictQuery, RecommendBriefQuery,
};
use crate::domain::profile::RawInput;
use crate::ports::CalculationRequest;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body shared by `/calculate`, `/compare` and `/verdict`.
pub type ProfileRequest = CalculationRequest;

impl From<ProfileRequest> for CompareArchitecturesQuery {
    fn from(request: ProfileRequest) -> Self {
        Self {
            profile: request.profile(),
        }
    }
}

impl From<ProfileRequest> for ComposeVerdictQuery {
    fn from(request: ProfileRequest) -> Self {
        Self {
            profile: request.profile(),
            architecture: request.architecture(),
        }
    }
}

/// Body for `/recommend`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// Number or numeric string. Anything else is recomputed from the profile.
    #[serde(default)]
    pub pivot_point: Option<RawInput>,
    #[serde(default)]
    pub team_size: Option<RawInput>,
    #[serde(default)]
    pub experience: Option<RawInput>,
    #[serde(default)]
    pub timeline: Option<RawInput>,
    #[serde(default)]
    pub scale: Option<RawInput>,
    #[serde(default)]
    pub architecture: Option<RawInput>,
    #[serde(default)]
    pub risk_level: Option<RawInput>,
}

impl From<RecommendRequest> for RecommendBriefQuery {
    fn from(request: RecommendRequest) -> Self {
        Self {
            pivot_point: request.pivot_point.as_ref().and_then(RawInput::as_number),
            team_size: request.team_size,
            experience: request.experience,
            timeline: request.timeline,
            scale: request.scale,
            architecture: request.architecture,
            risk_level: match request.risk_level {
                Some(RawInput::Label(label)) => Some(label),
                _ => None,
            },
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response
// ════════════════════════════════════════════════════════════════════════════════

/// Error body returned by every scoring endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::new("Method not allowed")
    }

    pub fn internal() -> Self {
        Self::new("Internal server error")
    }
}
