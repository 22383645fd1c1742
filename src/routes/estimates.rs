//! Estimate routes
//!
//! Pricing previews for the estimate builder and the pre-send check.

use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use axum_extra::extract::WithRejection;
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::estimates::{CalculateEstimateRequest, ValidateEstimateRequest, ValidationReport};
use crate::error::{ApiError, ApiResult};
use crate::middleware::RequestIdExt;
use crate::services::{calculate_estimate, check_ready_to_send, check_service_types, ValidationMode};

/// POST /estimates/calculate
///
/// Price the posted rooms. Pricing layers are defaults, then the account's
/// stored overrides, then any overrides in the request body.
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    WithRejection(Json(req), _): WithRejection<Json<CalculateEstimateRequest>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    tracing::info!(
        request_id = %headers.request_id(),
        account_id = ?req.account_id,
        rooms = req.rooms.len(),
        "Calculating estimate"
    );

    if state.settings.strict_service_types {
        let issues = check_service_types(&req.rooms);
        if !issues.is_empty() {
            return Err(ApiError::Validation(issues));
        }
    }

    let pricing = state
        .pricing
        .pricing_for_request(req.account_id, req.pricing.as_ref());
    let result = calculate_estimate(&req.rooms, &pricing);

    Ok(DataResponse::new(result))
}

/// POST /estimates/validate
///
/// Report whether the estimate is complete enough to send. `strict`
/// defaults to the server's strict-service-types setting.
pub async fn validate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    WithRejection(Json(req), _): WithRejection<Json<ValidateEstimateRequest>, ApiError>,
) -> impl IntoResponse {
    let strict = req.strict.unwrap_or(state.settings.strict_service_types);
    let issues = check_ready_to_send(&req.rooms, ValidationMode::from_strict(strict));

    tracing::info!(
        request_id = %headers.request_id(),
        rooms = req.rooms.len(),
        strict,
        issues = issues.len(),
        "Validated estimate"
    );

    DataResponse::new(ValidationReport::from_issues(&issues))
}
