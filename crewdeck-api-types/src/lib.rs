//! Unified domain types for the Crewdeck workforce console
//!
//! This crate provides consistent type definitions shared by the RBAC core
//! and its collaborators (employee directory, audit export), reducing
//! duplication and keeping the wire representations in one place.

pub mod domain;
pub mod enums;
pub mod ids;

// Re-export main types for convenience
pub use domain::{AuditRow, UnifiedEmployee};
pub use enums::{EmployeeStatus, ValidationEventType, ValidationOutcome};
pub use ids::EmployeeId;
