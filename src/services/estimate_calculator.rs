//! Estimate pricing engine
//!
//! Pure function over borrowed rooms and pricing. Every aggregate is
//! accumulated from unrounded values and rounded once when reported, so a
//! reported total can differ by a cent from the sum of its rounded lines.

use crate::domain::estimates::{
    BreakdownLine, DetailedBreakdownItem, EntityId, EstimateResult, Room, ServiceKind, ServiceType,
};
use crate::domain::numeric::finite_or_zero;
use crate::domain::pricing::Pricing;

const PREP_LINE_NAME: &str = "Room Preparation";

/// Round to cents. Ties go toward positive infinity.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let mut rounded = scaled.round();
    // f64::round sends negative ties away from zero
    if scaled - rounded == 0.5 {
        rounded += 1.0;
    }
    // normalizes -0.0
    rounded / 100.0 + 0.0
}

/// Unrounded material and labor cost of one service
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct LineCost {
    material: f64,
    labor: f64,
}

impl LineCost {
    fn total(&self) -> f64 {
        self.material + self.labor
    }
}

fn area_cost(units: f64, material_rate: f64, production_rate: f64, labor_rate: f64) -> LineCost {
    LineCost {
        material: units * material_rate,
        labor: (units / production_rate) * labor_rate,
    }
}

fn service_cost(kind: &ServiceKind, pricing: &Pricing) -> LineCost {
    let materials = &pricing.material_rates;
    let production = &pricing.production_rates;

    match kind {
        ServiceKind::WallPainting { surface_area } => area_cost(
            finite_or_zero(*surface_area),
            materials.wall_painting,
            production.wall_painting,
            pricing.labor_rate,
        ),
        ServiceKind::CeilingPainting { surface_area } => area_cost(
            finite_or_zero(*surface_area),
            materials.ceiling_painting,
            production.ceiling_painting,
            pricing.labor_rate,
        ),
        ServiceKind::Trims { ln_ft } => area_cost(
            finite_or_zero(*ln_ft),
            materials.trims,
            production.trims,
            pricing.labor_rate,
        ),
        ServiceKind::Additional { quantity, cost } => LineCost {
            material: finite_or_zero(*quantity) * finite_or_zero(*cost),
            labor: 0.0,
        },
        ServiceKind::Unknown { .. } => LineCost::default(),
    }
}

/// Price every room and service and produce the itemized estimate.
pub fn calculate_estimate(rooms: &[Room], pricing: &Pricing) -> EstimateResult {
    let mut total_material = 0.0;
    let mut total_labor = 0.0;
    let mut breakdown = Vec::with_capacity(rooms.len());

    for room in rooms {
        let mut room_total = 0.0;
        let mut lines = Vec::with_capacity(room.services.len() + 1);

        let prep_hours = finite_or_zero(room.prep_hours);
        if prep_hours > 0.0 {
            let prep_labor = prep_hours * pricing.labor_rate;
            total_labor += prep_labor;
            room_total += prep_labor;
            lines.push(BreakdownLine {
                service_id: EntityId::PREP,
                service_type: ServiceType::Prep,
                name: Some(PREP_LINE_NAME.to_string()),
                total: round2(prep_labor),
            });
        }

        for service in &room.services {
            let cost = service_cost(&service.kind, pricing);
            total_material += cost.material;
            total_labor += cost.labor;
            room_total += cost.total();

            // Unknown kinds price at zero and get no line
            match service.kind.service_type() {
                Some(service_type) => lines.push(BreakdownLine {
                    service_id: service.id.clone(),
                    service_type,
                    name: service.name.clone(),
                    total: round2(cost.total()),
                }),
                None => tracing::debug!(
                    room_id = %room.id,
                    service_id = %service.id,
                    service_type = service.kind.type_name(),
                    "Skipping unpriced service"
                ),
            }
        }

        breakdown.push(DetailedBreakdownItem {
            room_id: room.id.clone(),
            room_name: room.name.clone(),
            room_total: round2(room_total),
            services: lines,
        });
    }

    let base_cost = total_material + total_labor;
    let overhead_cost = base_cost * pricing.overhead_rate;
    let profit_amount = (base_cost + overhead_cost) * pricing.profit_margin_rate;
    let total = base_cost + overhead_cost + profit_amount;

    tracing::debug!(rooms = rooms.len(), total, "Estimate calculated");

    EstimateResult {
        total: round2(total),
        breakdown,
        material_cost: round2(total_material),
        labor_cost: round2(total_labor),
        overhead_cost: round2(overhead_cost),
        profit_amount: round2(profit_amount),
        base_cost: round2(base_cost),
    }
}
