//! API Handler for the platform advisor
//!
//! Strict request handling flow:
//! 1. Parse and validate the body
//! 2. Build the defaulted course record
//! 3. Run the recommender
//! 4. Log and count the outcome

use uuid::Uuid;

use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::recommender::{explain, Decision};

use super::errors::ApiResult;
use super::request::CourseRequest;
use super::response::SuggestionResponse;

/// Handle a raw JSON suggestion request
pub fn handle_suggest(
    body: impl AsRef<[u8]>,
    metrics: &MetricsRegistry,
) -> ApiResult<SuggestionResponse> {
    let decision = decide(body.as_ref(), metrics)?;
    Ok(SuggestionResponse::new(decision.suggested_platform))
}

/// Handle a raw JSON request and return the full decision trace
pub fn handle_explain(body: impl AsRef<[u8]>, metrics: &MetricsRegistry) -> ApiResult<Decision> {
    decide(body.as_ref(), metrics)
}

fn decide(body: &[u8], metrics: &MetricsRegistry) -> ApiResult<Decision> {
    let request_id = Uuid::new_v4().to_string();

    let request = match CourseRequest::parse(body) {
        Ok(r) => r,
        Err(e) => {
            metrics.increment_requests_rejected();
            let reason = e.to_string();
            log_event_with_fields(
                Event::RequestRejected,
                &[
                    ("code", e.code()),
                    ("reason", reason.as_str()),
                    ("request_id", request_id.as_str()),
                ],
            );
            return Err(e);
        }
    };

    let decision = explain(&request.into_constraints());

    metrics.record_recommendation(decision.suggested_platform);
    let position = decision.position.to_string();
    log_event_with_fields(
        Event::RecommendationIssued,
        &[
            ("platform", decision.suggested_platform.as_str()),
            ("position", position.as_str()),
            ("request_id", request_id.as_str()),
            ("rule", decision.rule.as_str()),
        ],
    );

    Ok(decision)
}
