//! Access validation
//!
//! Pure decision logic over the two static tables. A role is granted a
//! feature when it appears in the feature's allowed set or holds the
//! wildcard permission; everything else, including unknown features, is
//! denied.

use chrono::{DateTime, Utc};
use crewdeck_api_types::{EmployeeId, UnifiedEmployee};
use serde::{Deserialize, Serialize};

use crate::catalog::RoleCatalog;
use crate::config::RbacConfig;
use crate::error::RbacResult;
use crate::features::FeatureAccessTable;

/// Structured outcome of a single access check
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    pub subject_id: EmployeeId,
    pub subject_name: String,
    /// Feature identifier as requested, known or not
    pub feature: String,
    /// Role the subject held when the check ran
    pub role: String,
    /// Allowed set computed for the feature; empty for unknown features
    pub required_roles: Vec<String>,
    pub granted: bool,
    pub timestamp: DateTime<Utc>,
}

/// Stateless validator over the catalog and feature table
#[derive(Debug, Clone)]
pub struct AccessValidator {
    catalog: RoleCatalog,
    features: FeatureAccessTable,
}

impl AccessValidator {
    /// Create a validator from already-built tables
    pub fn new(catalog: RoleCatalog, features: FeatureAccessTable) -> Self {
        Self { catalog, features }
    }

    /// Build catalog and table from configuration and wrap them
    pub fn from_config(config: &RbacConfig) -> RbacResult<Self> {
        let catalog = RoleCatalog::from_config(config)?;
        let features = FeatureAccessTable::from_config(config, &catalog)?;
        Ok(Self::new(catalog, features))
    }

    /// Pure grant decision for a role/feature pair
    ///
    /// Wildcard roles pass regardless of the table, mirroring the catalog
    /// invariant; unknown roles and unknown features fail closed.
    pub fn evaluate(&self, role: &str, feature: &str) -> bool {
        if self.catalog.role_has_wildcard(role) {
            return true;
        }
        self.features.is_role_listed(feature, role)
    }

    /// Full decision record for an employee requesting a feature
    pub fn decide(&self, employee: &UnifiedEmployee, feature: &str) -> AccessDecision {
        AccessDecision {
            subject_id: employee.id.clone(),
            subject_name: employee.full_name.clone(),
            feature: feature.to_string(),
            role: employee.role.clone(),
            required_roles: self.features.allowed_roles(feature).to_vec(),
            granted: self.evaluate(&employee.role, feature),
            timestamp: Utc::now(),
        }
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    pub fn features(&self) -> &FeatureAccessTable {
        &self.features
    }
}
