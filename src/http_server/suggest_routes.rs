//! Suggestion HTTP Routes
//!
//! HTTP endpoints wrapping the platform recommender.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::api::{handle_explain, handle_suggest, ApiError, RuleEntry, WelcomeResponse};
use crate::observability::MetricsRegistry;
use crate::recommender::{FALLBACK_LABEL, RULES};

/// Shared suggestion state
#[derive(Debug, Default)]
pub struct SuggestState {
    pub metrics: Arc<MetricsRegistry>,
}

impl SuggestState {
    pub fn new(metrics: Arc<MetricsRegistry>) -> Self {
        Self { metrics }
    }
}

/// Suggestion routes with shared state
pub fn suggest_routes(state: Arc<SuggestState>) -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/rules", get(rules_handler))
        .route("/suggest_platform", post(suggest_handler))
        .route("/suggest_platform/explain", post(explain_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn welcome_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(WelcomeResponse::default()))
}

async fn rules_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(RuleEntry::table(&RULES, FALLBACK_LABEL)))
}

/// Recommend a platform for the posted course
async fn suggest_handler(
    State(state): State<Arc<SuggestState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let response = handle_suggest(&body, &state.metrics)?;
    Ok((StatusCode::OK, Json(response)))
}

/// Recommend a platform and return the rule trace
async fn explain_handler(
    State(state): State<Arc<SuggestState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let decision = handle_explain(&body, &state.metrics)?;
    Ok((StatusCode::OK, Json(decision)))
}
