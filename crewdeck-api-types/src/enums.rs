use serde::{Deserialize, Serialize};

/// Unified enums shared by the RBAC core and the console surfaces
///
/// Wire forms are the snake_case strings the hosted backend already stores,
/// so serde renames are fixed to `snake_case` rather than per-field.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EmployeeStatus::Active)
    }
}

/// Validation event categories
///
/// `SecurityViolation` is reserved: the console renders it but no operation
/// in the core produces it today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationEventType {
    PermissionCheck,
    RoleChange,
    EmergencyOverride,
    SecurityViolation,
    SystemAccess,
}

impl ValidationEventType {
    /// Stable string form used in stored events
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationEventType::PermissionCheck => "permission_check",
            ValidationEventType::RoleChange => "role_change",
            ValidationEventType::EmergencyOverride => "emergency_override",
            ValidationEventType::SecurityViolation => "security_violation",
            ValidationEventType::SystemAccess => "system_access",
        }
    }

    /// Human-readable label used by the audit export and console badges
    pub fn label(&self) -> &'static str {
        match self {
            ValidationEventType::PermissionCheck => "Permission Check",
            ValidationEventType::RoleChange => "Role Change",
            ValidationEventType::EmergencyOverride => "Emergency Override",
            ValidationEventType::SecurityViolation => "Security Violation",
            ValidationEventType::SystemAccess => "System Access",
        }
    }
}

impl std::fmt::Display for ValidationEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome attached to a validation event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    Granted,
    Denied,
    Completed,
}

impl ValidationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationOutcome::Granted => "granted",
            ValidationOutcome::Denied => "denied",
            ValidationOutcome::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
