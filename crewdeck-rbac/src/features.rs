//! Feature access table
//!
//! Static mapping from feature identifiers to the roles permitted to use
//! them. Role identifiers referenced here are checked against the catalog at
//! build time; feature keys stay dynamic and unknown ones resolve to the
//! empty role set, which denies everyone except wildcard roles.

use std::collections::HashMap;

use crate::catalog::RoleCatalog;
use crate::config::RbacConfig;
use crate::error::{RbacError, RbacResult};

/// Validated, immutable feature-to-roles table
#[derive(Debug, Clone)]
pub struct FeatureAccessTable {
    features: HashMap<String, Vec<String>>,
}

impl FeatureAccessTable {
    /// Build and validate the table from configuration
    ///
    /// Every role referenced by the table must exist in the catalog;
    /// duplicates within one feature entry are collapsed.
    pub fn from_config(config: &RbacConfig, catalog: &RoleCatalog) -> RbacResult<Self> {
        let mut features = HashMap::new();

        for (feature, roles) in &config.feature_access {
            if feature.is_empty() {
                return Err(RbacError::invalid_config(
                    "feature identifier cannot be empty",
                ));
            }

            let mut allowed: Vec<String> = Vec::with_capacity(roles.len());
            for role in roles {
                if !catalog.contains(role) {
                    return Err(RbacError::invalid_config(format!(
                        "feature '{}' references unknown role '{}'",
                        feature, role
                    )));
                }
                if !allowed.contains(role) {
                    allowed.push(role.clone());
                }
            }

            features.insert(feature.clone(), allowed);
        }

        Ok(Self { features })
    }

    /// Allowed role identifiers for a feature
    ///
    /// Unknown features yield the empty slice.
    pub fn allowed_roles(&self, feature: &str) -> &[String] {
        self.features
            .get(feature)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check whether a role appears in a feature's allowed set
    ///
    /// Table membership only; wildcard elevation is the validator's job.
    pub fn is_role_listed(&self, feature: &str, role: &str) -> bool {
        self.allowed_roles(feature).iter().any(|r| r == role)
    }

    /// Check whether a feature is configured
    pub fn contains(&self, feature: &str) -> bool {
        self.features.contains_key(feature)
    }

    /// All configured feature identifiers, sorted for stable display
    pub fn feature_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.features.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FeatureAccessTable {
        let config = RbacConfig::default();
        let catalog = RoleCatalog::from_config(&config).unwrap();
        FeatureAccessTable::from_config(&config, &catalog).unwrap()
    }

    #[test]
    fn test_allowed_roles_for_known_feature() {
        let table = table();
        let allowed = table.allowed_roles("payroll_view");
        assert!(allowed.contains(&"hr".to_string()));
        assert!(allowed.contains(&"admin".to_string()));
        assert!(!allowed.contains(&"user".to_string()));
    }

    #[test]
    fn test_unknown_feature_is_closed() {
        let table = table();
        assert!(table.allowed_roles("crane_telemetry").is_empty());
        assert!(!table.is_role_listed("crane_telemetry", "admin"));
        assert!(!table.contains("crane_telemetry"));
    }

    #[test]
    fn test_unknown_role_reference_fails_at_build() {
        let mut config = RbacConfig::default();
        config
            .feature_access
            .insert("night_shift".to_string(), vec!["watchman".to_string()]);
        let catalog = RoleCatalog::from_config(&config).unwrap();

        let err = FeatureAccessTable::from_config(&config, &catalog).unwrap_err();
        assert!(matches!(err, RbacError::InvalidConfig { .. }));
    }

    #[test]
    fn test_duplicate_roles_collapsed() {
        let mut config = RbacConfig::default();
        config.feature_access.insert(
            "gate_log".to_string(),
            vec!["admin".to_string(), "admin".to_string()],
        );
        let catalog = RoleCatalog::from_config(&config).unwrap();
        let table = FeatureAccessTable::from_config(&config, &catalog).unwrap();

        assert_eq!(table.allowed_roles("gate_log"), ["admin".to_string()]);
    }

    #[test]
    fn test_feature_ids_sorted() {
        let table = table();
        let ids = table.feature_ids();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert!(ids.contains(&"system_settings"));
    }
}
