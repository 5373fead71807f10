//! HTTP handlers for scoring endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    CalculatePivotHandler, CalculatePivotQuery, CompareArchitecturesHandler,
    ComposeVerdictHandler, RecommendBriefHandler,
};
use crate::domain::advisory::{BusinessBrief, RecommendationComposer, Verdict};
use crate::domain::scoring::{RankingResult, ScoringEngine};
use crate::ports::{CalculationReport, CalculatorError, PivotCalculator};

use super::dto::{ErrorResponse, ProfileRequest, RecommendRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Scoring API error that implements IntoResponse.
#[derive(Debug)]
pub enum ScoringApiError {
    BadRequest(String),
    Upstream(String),
    MethodNotAllowed,
}

impl IntoResponse for ScoringApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ScoringApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            ScoringApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, ErrorResponse::new(msg)),
            ScoringApiError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, ErrorResponse::method_not_allowed())
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<JsonRejection> for ScoringApiError {
    fn from(rejection: JsonRejection) -> Self {
        ScoringApiError::BadRequest(rejection.body_text())
    }
}

impl From<CalculatorError> for ScoringApiError {
    fn from(error: CalculatorError) -> Self {
        tracing::error!(error = %error, "calculator failed");
        ScoringApiError::Upstream(format!("Calculator unavailable: {}", error))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing scoring dependencies.
#[derive(Clone)]
pub struct ScoringAppState {
    pub calculator: Arc<dyn PivotCalculator>,
    pub engine: ScoringEngine,
}

impl ScoringAppState {
    pub fn new(calculator: Arc<dyn PivotCalculator>, engine: ScoringEngine) -> Self {
        Self { calculator, engine }
    }

    pub fn calculate_pivot_handler(&self) -> CalculatePivotHandler {
        CalculatePivotHandler::new(self.calculator.clone())
    }

    pub fn recommend_brief_handler(&self) -> RecommendBriefHandler {
        RecommendBriefHandler::new(self.engine)
    }

    pub fn compare_architectures_handler(&self) -> CompareArchitecturesHandler {
        CompareArchitecturesHandler::new(self.engine)
    }

    pub fn compose_verdict_handler(&self) -> ComposeVerdictHandler {
        ComposeVerdictHandler::new(RecommendationComposer::new(self.engine))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /calculate - Pivot Point for one architecture
pub async fn calculate(
    State(state): State<ScoringAppState>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<Json<CalculationReport>, ScoringApiError> {
    let Json(request) = payload?;
    let report = state
        .calculate_pivot_handler()
        .handle(CalculatePivotQuery { request })
        .await?;
    Ok(Json(report))
}

/// POST /recommend - Persona-based business brief
pub async fn recommend(
    State(state): State<ScoringAppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<BusinessBrief>, ScoringApiError> {
    let Json(request) = payload?;
    let brief = state.recommend_brief_handler().handle(request.into());
    Ok(Json(brief))
}

/// POST /compare - Ranking of all four architectures
pub async fn compare(
    State(state): State<ScoringAppState>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<Json<RankingResult>, ScoringApiError> {
    let Json(request) = payload?;
    let ranking = state.compare_architectures_handler().handle(request.into());
    Ok(Json(ranking))
}

/// POST /verdict - Verdict on the caller's chosen architecture
pub async fn verdict(
    State(state): State<ScoringAppState>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<Json<Verdict>, ScoringApiError> {
    let Json(request) = payload?;
    let verdict = state.compose_verdict_handler().handle(request.into());

    tracing::info!(
        user_choice = verdict.user_choice.label(),
        recommended = verdict.recommended.label(),
        approved = verdict.approved,
        "verdict composed"
    );

    Ok(Json(verdict))
}

/// OPTIONS on any scoring route
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any method other than POST or OPTIONS
pub async fn method_not_allowed() -> ScoringApiError {
    ScoringApiError::MethodNotAllowed
}
