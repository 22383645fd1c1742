pub mod estimates;
pub mod health;
pub mod pricing;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

use crate::app::AppState;
use crate::error::ApiError;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Pricing configuration
        .route("/pricing/defaults", get(pricing::get_default_pricing))
        .route(
            "/accounts/:account_id/pricing",
            get(pricing::get_account_pricing)
                .put(pricing::update_account_pricing)
                .delete(pricing::reset_account_pricing),
        )
        // Estimates
        .route("/estimates/calculate", post(estimates::calculate))
        .route("/estimates/validate", post(estimates::validate))
        .fallback(|| async { ApiError::not_found("Route not found") })
}
