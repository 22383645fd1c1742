//! Estimate domain types
//!
//! Rooms and services as they arrive from the estimate builder, and the
//! itemized result the calculator hands back.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::numeric::{numify, numify_field};
use super::pricing::PricingOverrides;

/// Room or service identifier. The estimate builder sends either form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl EntityId {
    /// Id carried by the synthetic room-preparation line
    pub const PREP: EntityId = EntityId::Int(-1);
}

/// Placeholder for services posted without an id
impl Default for EntityId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<i32> for EntityId {
    fn from(id: i32) -> Self {
        Self::Int(i64::from(id))
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{}", id),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// What a service bills for
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceKind {
    /// Wall area in square feet
    WallPainting { surface_area: f64 },
    /// Ceiling area in square feet
    CeilingPainting { surface_area: f64 },
    /// Linear feet of trim
    Trims { ln_ft: f64 },
    /// Flat line item, material only
    Additional { quantity: f64, cost: f64 },
    /// A `type` this backend does not price. Contributes nothing and is
    /// left out of the breakdown.
    Unknown { type_name: String },
}

impl ServiceKind {
    /// Breakdown line type, or `None` for unpriced kinds.
    pub fn service_type(&self) -> Option<ServiceType> {
        match self {
            Self::WallPainting { .. } => Some(ServiceType::WallPainting),
            Self::CeilingPainting { .. } => Some(ServiceType::CeilingPainting),
            Self::Trims { .. } => Some(ServiceType::Trims),
            Self::Additional { .. } => Some(ServiceType::Additional),
            Self::Unknown { .. } => None,
        }
    }

    /// The wire discriminator this kind was read from
    pub fn type_name(&self) -> &str {
        match self {
            Self::WallPainting { .. } => "wallPainting",
            Self::CeilingPainting { .. } => "ceilingPainting",
            Self::Trims { .. } => "trims",
            Self::Additional { .. } => "additional",
            Self::Unknown { type_name } => type_name,
        }
    }
}

/// A single billable work item within a room
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawService")]
pub struct Service {
    pub id: EntityId,
    pub name: Option<String>,
    pub kind: ServiceKind,
}

impl Service {
    pub fn new(id: impl Into<EntityId>, kind: ServiceKind) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Service as the form posts it: a `type` tag plus loosely typed fields
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawService {
    #[serde(default)]
    id: EntityId,
    #[serde(rename = "type", default)]
    service_type: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    surface_area: Value,
    #[serde(default)]
    ln_ft: Value,
    #[serde(default)]
    quantity: Value,
    #[serde(default)]
    cost: Value,
}

impl From<RawService> for Service {
    fn from(raw: RawService) -> Self {
        let kind = match raw.service_type.as_str() {
            "wallPainting" => ServiceKind::WallPainting {
                surface_area: numify(&raw.surface_area),
            },
            "ceilingPainting" => ServiceKind::CeilingPainting {
                surface_area: numify(&raw.surface_area),
            },
            "trims" => ServiceKind::Trims {
                ln_ft: numify(&raw.ln_ft),
            },
            "additional" => ServiceKind::Additional {
                quantity: numify(&raw.quantity),
                cost: numify(&raw.cost),
            },
            _ => ServiceKind::Unknown {
                type_name: raw.service_type,
            },
        };

        Self {
            id: raw.id,
            name: raw.name,
            kind,
        }
    }
}

/// A named space with a prep allowance and its services
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "numify_field")]
    pub prep_hours: f64,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Room {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            prep_hours: 0.0,
            services: Vec::new(),
        }
    }

    pub fn with_prep_hours(mut self, hours: f64) -> Self {
        self.prep_hours = hours;
        self
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }
}

/// Breakdown line type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceType {
    Prep,
    WallPainting,
    CeilingPainting,
    Trims,
    Additional,
}

/// One priced line inside a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownLine {
    pub service_id: EntityId,
    pub service_type: ServiceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub total: f64,
}

/// Per-room section of the breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedBreakdownItem {
    pub room_id: EntityId,
    pub room_name: String,
    pub room_total: f64,
    pub services: Vec<BreakdownLine>,
}

/// Calculator output. Every figure is rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    pub total: f64,
    pub breakdown: Vec<DetailedBreakdownItem>,
    pub material_cost: f64,
    pub labor_cost: f64,
    pub overhead_cost: f64,
    pub profit_amount: f64,
    pub base_cost: f64,
}

/// Request DTO for pricing an estimate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateEstimateRequest {
    #[serde(default)]
    pub account_id: Option<Uuid>,
    #[serde(default)]
    pub pricing: Option<PricingOverrides>,
    pub rooms: Vec<Room>,
}

/// Request DTO for the send-readiness check
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateEstimateRequest {
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub strict: Option<bool>,
}

/// A single readiness problem
#[derive(Debug, Clone, Serialize)]
pub struct IssueResponse {
    pub code: &'static str,
    pub message: String,
}

/// Response DTO for the send-readiness check
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub ready: bool,
    pub issues: Vec<IssueResponse>,
}
