//! Send-readiness checks for estimates
//!
//! Runs before an estimate goes out. The calculator never calls into this
//! module; it prices whatever it is given.

use thiserror::Error;

use crate::domain::estimates::{EntityId, IssueResponse, Room, ServiceKind, ValidationReport};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationIssue {
    #[error("Estimate has no rooms")]
    NoRooms,

    #[error("Room '{room_name}' ({room_id}) has no services")]
    RoomWithoutServices { room_id: EntityId, room_name: String },

    #[error("Room {room_id} has a service of unsupported type '{type_name}'")]
    UnknownServiceType { room_id: EntityId, type_name: String },

    #[error("Room {room_id}: {field} is negative on service {service_id}")]
    NegativeQuantity {
        room_id: EntityId,
        service_id: EntityId,
        field: &'static str,
    },
}

impl ValidationIssue {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoRooms => "NO_ROOMS",
            Self::RoomWithoutServices { .. } => "ROOM_WITHOUT_SERVICES",
            Self::UnknownServiceType { .. } => "UNKNOWN_SERVICE_TYPE",
            Self::NegativeQuantity { .. } => "NEGATIVE_QUANTITY",
        }
    }
}

impl From<&ValidationIssue> for IssueResponse {
    fn from(issue: &ValidationIssue) -> Self {
        Self {
            code: issue.code(),
            message: issue.to_string(),
        }
    }
}

impl ValidationReport {
    pub fn from_issues(issues: &[ValidationIssue]) -> Self {
        Self {
            ready: issues.is_empty(),
            issues: issues.iter().map(IssueResponse::from).collect(),
        }
    }
}

/// How unpriced service types are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Unknown types pass; the calculator drops them.
    #[default]
    Lenient,
    /// Unknown types are reported.
    Strict,
}

impl ValidationMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// Only the unsupported-type issues, in room and service order.
pub fn check_service_types(rooms: &[Room]) -> Vec<ValidationIssue> {
    rooms
        .iter()
        .flat_map(|room| {
            room.services.iter().filter_map(move |service| match &service.kind {
                ServiceKind::Unknown { type_name } => Some(ValidationIssue::UnknownServiceType {
                    room_id: room.id.clone(),
                    type_name: type_name.clone(),
                }),
                _ => None,
            })
        })
        .collect()
}

fn negative_fields(kind: &ServiceKind) -> Vec<&'static str> {
    let mut fields = Vec::new();
    match kind {
        ServiceKind::WallPainting { surface_area } | ServiceKind::CeilingPainting { surface_area } => {
            if *surface_area < 0.0 {
                fields.push("surfaceArea");
            }
        }
        ServiceKind::Trims { ln_ft } => {
            if *ln_ft < 0.0 {
                fields.push("lnFt");
            }
        }
        ServiceKind::Additional { quantity, cost } => {
            if *quantity < 0.0 {
                fields.push("quantity");
            }
            if *cost < 0.0 {
                fields.push("cost");
            }
        }
        ServiceKind::Unknown { .. } => {}
    }
    fields
}

/// Every reason the estimate is not complete enough to send.
pub fn check_ready_to_send(rooms: &[Room], mode: ValidationMode) -> Vec<ValidationIssue> {
    if rooms.is_empty() {
        return vec![ValidationIssue::NoRooms];
    }

    let mut issues = Vec::new();
    for room in rooms {
        if room.services.is_empty() {
            issues.push(ValidationIssue::RoomWithoutServices {
                room_id: room.id.clone(),
                room_name: room.name.clone(),
            });
            continue;
        }

        for service in &room.services {
            if let ServiceKind::Unknown { type_name } = &service.kind {
                if mode == ValidationMode::Strict {
                    issues.push(ValidationIssue::UnknownServiceType {
                        room_id: room.id.clone(),
                        type_name: type_name.clone(),
                    });
                }
                continue;
            }

            for field in negative_fields(&service.kind) {
                issues.push(ValidationIssue::NegativeQuantity {
                    room_id: room.id.clone(),
                    service_id: service.id.clone(),
                    field,
                });
            }
        }
    }

    issues
}

pub fn is_ready(rooms: &[Room], mode: ValidationMode) -> bool {
    check_ready_to_send(rooms, mode).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::estimates::Service;

    fn unknown(id: i64) -> Service {
        Service::new(
            id,
            ServiceKind::Unknown {
                type_name: "drywallRepair".to_string(),
            },
        )
    }

    #[test]
    fn test_no_rooms() {
        assert_eq!(
            check_ready_to_send(&[], ValidationMode::Lenient),
            vec![ValidationIssue::NoRooms]
        );
    }

    #[test]
    fn test_room_without_services() {
        let rooms = vec![
            Room::new(1, "Kitchen").with_service(Service::new(1, ServiceKind::Trims { ln_ft: 10.0 })),
            Room::new(2, "Pantry").with_prep_hours(1.0),
        ];

        let issues = check_ready_to_send(&rooms, ValidationMode::Lenient);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code(), "ROOM_WITHOUT_SERVICES");
        assert_eq!(issues[0].to_string(), "Room 'Pantry' (2) has no services");
    }

    #[test]
    fn test_unknown_types_only_reported_in_strict_mode() {
        let rooms = vec![Room::new(1, "Garage").with_service(unknown(7))];

        assert!(is_ready(&rooms, ValidationMode::Lenient));

        let issues = check_ready_to_send(&rooms, ValidationMode::Strict);
        assert_eq!(
            issues,
            vec![ValidationIssue::UnknownServiceType {
                room_id: EntityId::Int(1),
                type_name: "drywallRepair".to_string(),
            }]
        );
        assert_eq!(check_service_types(&rooms), issues);
    }

    #[test]
    fn test_negative_values_are_reported() {
        let rooms = vec![Room::new("r", "Hall").with_service(Service::new(
            3,
            ServiceKind::Additional {
                quantity: -2.0,
                cost: -1.0,
            },
        ))];

        let issues = check_ready_to_send(&rooms, ValidationMode::Lenient);
        let fields: Vec<&str> = issues
            .iter()
            .filter_map(|issue| match issue {
                ValidationIssue::NegativeQuantity { field, .. } => Some(*field),
                _ => None,
            })
            .collect();
        assert_eq!(fields, vec!["quantity", "cost"]);
    }

    #[test]
    fn test_report_from_issues() {
        let report = ValidationReport::from_issues(&[ValidationIssue::NoRooms]);
        assert!(!report.ready);
        assert_eq!(report.issues[0].code, "NO_ROOMS");
        assert_eq!(report.issues[0].message, "Estimate has no rooms");

        assert!(ValidationReport::from_issues(&[]).ready);
    }
}
