//! RBAC core for the Crewdeck workforce console
//!
//! This crate provides the in-memory access-control engine behind the
//! console's security screens:
//! - Static role catalog and feature access table, validated at startup
//! - Pure grant decisions with fail-closed handling of unknown inputs
//! - Bounded, most-recent-first validation event logs (live queue and audit)
//! - Session operations: access checks, role changes, emergency overrides

pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod features;
pub mod session;
pub mod validator;

pub use catalog::{Role, RoleCatalog};
pub use config::{RbacConfig, RoleDefinition, WILDCARD_PERMISSION};
pub use error::{RbacError, RbacResult};
pub use events::{EventOrder, ValidationEvent, ValidationEventLog};
pub use features::FeatureAccessTable;
pub use session::{BulkRoleChange, RbacSession};
pub use validator::{AccessDecision, AccessValidator};

/// Re-export commonly used types
pub use crewdeck_api_types::{
    AuditRow, EmployeeId, EmployeeStatus, UnifiedEmployee, ValidationEventType,
    ValidationOutcome,
};
