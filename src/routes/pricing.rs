//! Pricing configuration routes
//!
//! Read and replace the per-account overrides the calculator prices with.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{DataResponse, NoContent};
use crate::app::AppState;
use crate::domain::pricing::{Pricing, PricingOverrides};
use crate::error::ApiError;

/// Response DTO for an account's pricing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPricingResponse {
    pub account_id: Uuid,
    pub overrides: PricingOverrides,
    pub effective: Pricing,
}

/// GET /pricing/defaults
pub async fn get_default_pricing(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    DataResponse::new(state.pricing.default_pricing())
}

/// GET /accounts/:account_id/pricing
pub async fn get_account_pricing(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(account_id), _): WithRejection<Path<Uuid>, ApiError>,
) -> impl IntoResponse {
    DataResponse::new(AccountPricingResponse {
        account_id,
        overrides: state.pricing.stored_overrides(account_id),
        effective: state.pricing.effective_pricing(account_id),
    })
}

/// PUT /accounts/:account_id/pricing
///
/// Replaces the stored overrides. Invalid values are kept as stored but
/// sanitized away in the effective pricing.
pub async fn update_account_pricing(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(account_id), _): WithRejection<Path<Uuid>, ApiError>,
    WithRejection(Json(overrides), _): WithRejection<Json<PricingOverrides>, ApiError>,
) -> impl IntoResponse {
    tracing::info!(account_id = %account_id, "Updating account pricing");

    let effective = state.pricing.save_overrides(account_id, overrides);

    DataResponse::new(AccountPricingResponse {
        account_id,
        overrides: state.pricing.stored_overrides(account_id),
        effective,
    })
}

/// DELETE /accounts/:account_id/pricing
pub async fn reset_account_pricing(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(account_id), _): WithRejection<Path<Uuid>, ApiError>,
) -> impl IntoResponse {
    let removed = state.pricing.reset(account_id);
    tracing::info!(account_id = %account_id, removed, "Reset account pricing");
    NoContent
}
