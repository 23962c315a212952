use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{EmployeeStatus, ValidationOutcome};
use crate::ids::EmployeeId;

/// Unified employee representation
///
/// Matches the payload returned by the hosted employee directory. The RBAC
/// core treats this as its session working copy and only ever rewrites the
/// `role` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedEmployee {
    pub id: EmployeeId,
    pub full_name: String,
    pub email: String,
    /// Role identifier; must reference a catalog entry
    pub role: String,
    pub status: EmployeeStatus,
    pub last_activity_date: Option<DateTime<Utc>>,
}

impl UnifiedEmployee {
    /// Create an employee record with an active status and no activity yet
    pub fn new(
        id: impl Into<EmployeeId>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            role: role.into(),
            status: EmployeeStatus::Active,
            last_activity_date: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// One row of the audit export
///
/// Column order and header names are the externally observable contract of
/// the export collaborator; rendering to a delimited file happens outside
/// the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRow {
    pub timestamp: DateTime<Utc>,
    pub type_label: String,
    pub user: String,
    pub action: String,
    pub result: ValidationOutcome,
    pub details: String,
}

impl AuditRow {
    /// Export header, in column order
    pub const HEADERS: [&'static str; 6] =
        ["Timestamp", "Type", "User", "Action", "Result", "Details"];
}
