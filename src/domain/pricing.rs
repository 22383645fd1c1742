//! Pricing configuration domain types
//!
//! A `Pricing` is what the estimate calculator consumes. Accounts store
//! partial `PricingOverrides`; those are merged over the baseline and then
//! sanitized field by field before any calculation sees them.

use serde::{Deserialize, Serialize};

use super::numeric::loose_f64;

/// Currency per unit of work, per service type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRates {
    pub wall_painting: f64,
    pub ceiling_painting: f64,
    pub trims: f64,
}

/// Units of work per labor hour, per service type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRates {
    pub wall_painting: f64,
    pub ceiling_painting: f64,
    pub trims: f64,
}

/// Complete pricing configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    /// Currency per labor hour
    pub labor_rate: f64,
    /// Fraction of material + labor
    pub overhead_rate: f64,
    /// Fraction of base + overhead
    pub profit_margin_rate: f64,
    pub material_rates: MaterialRates,
    pub production_rates: ProductionRates,
}

impl Default for MaterialRates {
    fn default() -> Self {
        Self {
            wall_painting: 0.35,
            ceiling_painting: 0.40,
            trims: 0.50,
        }
    }
}

impl Default for ProductionRates {
    fn default() -> Self {
        Self {
            wall_painting: 150.0,
            ceiling_painting: 120.0,
            trims: 60.0,
        }
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            labor_rate: 45.0,
            overhead_rate: 0.15,
            profit_margin_rate: 0.20,
            material_rates: MaterialRates::default(),
            production_rates: ProductionRates::default(),
        }
    }
}

/// Partial rate map; each key overrides independently
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateOverrides {
    #[serde(default, deserialize_with = "loose_f64", skip_serializing_if = "Option::is_none")]
    pub wall_painting: Option<f64>,
    #[serde(default, deserialize_with = "loose_f64", skip_serializing_if = "Option::is_none")]
    pub ceiling_painting: Option<f64>,
    #[serde(default, deserialize_with = "loose_f64", skip_serializing_if = "Option::is_none")]
    pub trims: Option<f64>,
}

impl RateOverrides {
    fn overlay(&self, other: &RateOverrides) -> RateOverrides {
        RateOverrides {
            wall_painting: other.wall_painting.or(self.wall_painting),
            ceiling_painting: other.ceiling_painting.or(self.ceiling_painting),
            trims: other.trims.or(self.trims),
        }
    }

    fn is_empty(&self) -> bool {
        self.wall_painting.is_none() && self.ceiling_painting.is_none() && self.trims.is_none()
    }
}

/// Stored or requested partial pricing configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOverrides {
    #[serde(default, deserialize_with = "loose_f64", skip_serializing_if = "Option::is_none")]
    pub labor_rate: Option<f64>,
    #[serde(default, deserialize_with = "loose_f64", skip_serializing_if = "Option::is_none")]
    pub overhead_rate: Option<f64>,
    #[serde(default, deserialize_with = "loose_f64", skip_serializing_if = "Option::is_none")]
    pub profit_margin_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_rates: Option<RateOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_rates: Option<RateOverrides>,
}

impl PricingOverrides {
    /// Combine two override layers; keys set in `other` win.
    pub fn overlay(&self, other: &PricingOverrides) -> PricingOverrides {
        let rates = |mine: Option<RateOverrides>, theirs: Option<RateOverrides>| {
            match (mine, theirs) {
                (Some(a), Some(b)) => Some(a.overlay(&b)),
                (a, b) => b.or(a),
            }
        };

        PricingOverrides {
            labor_rate: other.labor_rate.or(self.labor_rate),
            overhead_rate: other.overhead_rate.or(self.overhead_rate),
            profit_margin_rate: other.profit_margin_rate.or(self.profit_margin_rate),
            material_rates: rates(self.material_rates, other.material_rates),
            production_rates: rates(self.production_rates, other.production_rates),
        }
    }

    /// Shallow field-by-field merge over `base`. Values are not validated here.
    pub fn merge_over(&self, base: &Pricing) -> Pricing {
        let material = self.material_rates.unwrap_or_default();
        let production = self.production_rates.unwrap_or_default();

        Pricing {
            labor_rate: self.labor_rate.unwrap_or(base.labor_rate),
            overhead_rate: self.overhead_rate.unwrap_or(base.overhead_rate),
            profit_margin_rate: self.profit_margin_rate.unwrap_or(base.profit_margin_rate),
            material_rates: MaterialRates {
                wall_painting: material
                    .wall_painting
                    .unwrap_or(base.material_rates.wall_painting),
                ceiling_painting: material
                    .ceiling_painting
                    .unwrap_or(base.material_rates.ceiling_painting),
                trims: material.trims.unwrap_or(base.material_rates.trims),
            },
            production_rates: ProductionRates {
                wall_painting: production
                    .wall_painting
                    .unwrap_or(base.production_rates.wall_painting),
                ceiling_painting: production
                    .ceiling_painting
                    .unwrap_or(base.production_rates.ceiling_painting),
                trims: production.trims.unwrap_or(base.production_rates.trims),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labor_rate.is_none()
            && self.overhead_rate.is_none()
            && self.profit_margin_rate.is_none()
            && self.material_rates.map_or(true, |r| r.is_empty())
            && self.production_rates.map_or(true, |r| r.is_empty())
    }
}

fn non_negative(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

fn positive(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

/// Validate each field independently, replacing bad values with the
/// matching field of `fallback`.
///
/// Labor and production rates must be strictly positive (production rates
/// are divisors); every other rate must be non-negative. `fallback` is
/// expected to be sane already.
pub fn sanitize_pricing(pricing: Pricing, fallback: &Pricing) -> Pricing {
    Pricing {
        labor_rate: positive(pricing.labor_rate, fallback.labor_rate),
        overhead_rate: non_negative(pricing.overhead_rate, fallback.overhead_rate),
        profit_margin_rate: non_negative(pricing.profit_margin_rate, fallback.profit_margin_rate),
        material_rates: MaterialRates {
            wall_painting: non_negative(
                pricing.material_rates.wall_painting,
                fallback.material_rates.wall_painting,
            ),
            ceiling_painting: non_negative(
                pricing.material_rates.ceiling_painting,
                fallback.material_rates.ceiling_painting,
            ),
            trims: non_negative(pricing.material_rates.trims, fallback.material_rates.trims),
        },
        production_rates: ProductionRates {
            wall_painting: positive(
                pricing.production_rates.wall_painting,
                fallback.production_rates.wall_painting,
            ),
            ceiling_painting: positive(
                pricing.production_rates.ceiling_painting,
                fallback.production_rates.ceiling_painting,
            ),
            trims: positive(
                pricing.production_rates.trims,
                fallback.production_rates.trims,
            ),
        },
    }
}

/// Merge `overrides` over `base`, then sanitize against `base`.
pub fn resolve_pricing(overrides: &PricingOverrides, base: &Pricing) -> Pricing {
    sanitize_pricing(overrides.merge_over(base), base)
}
