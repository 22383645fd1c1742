//! Domain types and DTOs
//!
//! Rooms, services, pricing configuration and the estimate breakdown.

pub mod estimates;
pub mod numeric;
pub mod pricing;

pub use estimates::*;
pub use pricing::*;
