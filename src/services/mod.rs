//! Service layer modules.
//!
//! Contains the estimate pricing engine, the send-readiness checks, and the
//! per-account pricing configuration service.

pub mod estimate_calculator;
pub mod estimate_validation;
pub mod pricing_settings;

pub use estimate_calculator::{calculate_estimate, round2};
pub use estimate_validation::{check_ready_to_send, check_service_types, ValidationIssue, ValidationMode};
pub use pricing_settings::PricingSettingsService;
