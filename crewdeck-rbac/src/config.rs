//! Configuration for the RBAC core
//!
//! Role and feature catalogs are constructed once at session start and never
//! mutated afterwards. The default configuration carries the standard
//! construction-console catalog; deployments may override it from a YAML
//! file.

use crate::error::{RbacError, RbacResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Sentinel permission granting every capability
pub const WILDCARD_PERMISSION: &str = "*";

/// RBAC configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Standard role definitions, keyed by role identifier
    pub standard_roles: HashMap<String, RoleDefinition>,

    /// Feature identifier to allowed role identifiers
    pub feature_access: HashMap<String, Vec<String>>,

    /// Capacity of the most-recent-first live validation queue
    #[serde(default = "default_live_queue_capacity")]
    pub live_queue_capacity: usize,

    /// Capacity of the most-recent-first audit trail
    #[serde(default = "default_audit_log_capacity")]
    pub audit_log_capacity: usize,
}

fn default_live_queue_capacity() -> usize {
    10
}

fn default_audit_log_capacity() -> usize {
    50
}

impl Default for RbacConfig {
    fn default() -> Self {
        let mut standard_roles = HashMap::new();

        standard_roles.insert(
            "user".to_string(),
            RoleDefinition {
                label: "Field Worker".to_string(),
                level: 1,
                permissions: vec![
                    "attendance.view_own".to_string(),
                    "payroll.view_own".to_string(),
                ],
            },
        );

        standard_roles.insert(
            "supervisor".to_string(),
            RoleDefinition {
                label: "Site Supervisor".to_string(),
                level: 2,
                permissions: vec![
                    "attendance.view".to_string(),
                    "attendance.edit".to_string(),
                    "incidents.view".to_string(),
                    "incidents.report".to_string(),
                ],
            },
        );

        standard_roles.insert(
            "hr".to_string(),
            RoleDefinition {
                label: "HR Manager".to_string(),
                level: 3,
                permissions: vec![
                    "attendance.view".to_string(),
                    "payroll.view".to_string(),
                    "payroll.edit".to_string(),
                    "reports.view".to_string(),
                    "employees.view".to_string(),
                ],
            },
        );

        standard_roles.insert(
            "admin".to_string(),
            RoleDefinition {
                label: "Administrator".to_string(),
                level: 4,
                permissions: vec![
                    "attendance.manage".to_string(),
                    "payroll.manage".to_string(),
                    "employees.manage".to_string(),
                    "incidents.manage".to_string(),
                    "reports.manage".to_string(),
                    "audit.view".to_string(),
                ],
            },
        );

        standard_roles.insert(
            "superadmin".to_string(),
            RoleDefinition {
                label: "Super Administrator".to_string(),
                level: 5,
                permissions: vec![WILDCARD_PERMISSION.to_string()],
            },
        );

        let mut feature_access = HashMap::new();
        let features: [(&str, &[&str]); 11] = [
            ("self_service", &["user", "supervisor", "hr", "admin"]),
            ("attendance_view", &["supervisor", "hr", "admin"]),
            ("attendance_manage", &["admin"]),
            ("payroll_view", &["hr", "admin"]),
            ("payroll_manage", &["admin"]),
            ("incident_management", &["supervisor", "admin"]),
            ("reports_view", &["hr", "admin"]),
            ("employee_directory", &["hr", "admin"]),
            ("audit_log_view", &["admin"]),
            ("role_management", &["superadmin"]),
            ("system_settings", &["superadmin"]),
        ];
        for (feature, roles) in features {
            feature_access.insert(
                feature.to_string(),
                roles.iter().map(|r| r.to_string()).collect(),
            );
        }

        Self {
            standard_roles,
            feature_access,
            live_queue_capacity: default_live_queue_capacity(),
            audit_log_capacity: default_audit_log_capacity(),
        }
    }
}

impl RbacConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> RbacResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    ///
    /// An explicit path wins; otherwise the built-in defaults are used.
    pub fn load(config_path: Option<impl AsRef<Path>>) -> RbacResult<Self> {
        match config_path {
            Some(path) => Self::from_file(path),
            None => {
                tracing::debug!("no RBAC config path given, using built-in catalog");
                Ok(Self::default())
            }
        }
    }

    /// Get role definition by identifier
    pub fn get_role_definition(&self, role_name: &str) -> Option<&RoleDefinition> {
        self.standard_roles.get(role_name)
    }

    /// Shallow structural validation
    ///
    /// Catalog-level rules (distinct levels, known roles in the feature
    /// table) are enforced when the catalog and table are built.
    pub fn validate(&self) -> RbacResult<()> {
        if self.standard_roles.is_empty() {
            return Err(RbacError::invalid_config("at least one role is required"));
        }

        if self.live_queue_capacity == 0 || self.audit_log_capacity == 0 {
            return Err(RbacError::invalid_config(
                "event log capacities must be greater than zero",
            ));
        }

        Ok(())
    }
}

/// Role definition in configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// Display label shown in the console
    pub label: String,

    /// Privilege level; strictly increases with privilege and is unique
    pub level: u8,

    /// Ordered capability strings, or the single wildcard entry
    pub permissions: Vec<String>,
}

impl RoleDefinition {
    /// Create a new role definition
    pub fn new(label: impl Into<String>, level: u8, permissions: Vec<String>) -> Self {
        Self {
            label: label.into(),
            level,
            permissions,
        }
    }

    /// Check whether this definition carries the wildcard permission
    pub fn has_wildcard(&self) -> bool {
        self.permissions.iter().any(|p| p == WILDCARD_PERMISSION)
    }
}
