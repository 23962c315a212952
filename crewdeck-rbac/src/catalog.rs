//! Role catalog
//!
//! The catalog is built once from configuration, validated, and never
//! mutated afterwards. Unknown-role bugs become startup failures here
//! instead of silent runtime misses.

use std::collections::{HashMap, HashSet};

use crate::config::{RbacConfig, WILDCARD_PERMISSION};
use crate::error::{RbacError, RbacResult};

/// A resolved role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    /// Role identifier, as referenced by employees and the feature table
    pub name: String,

    /// Privilege level; unique within a catalog, higher means more privileged
    pub level: u8,

    /// Display label shown in the console
    pub label: String,

    /// Ordered capability strings; `"*"` alone means every capability
    pub permissions: Vec<String>,
}

impl Role {
    /// Check whether this role holds the wildcard permission
    pub fn has_wildcard(&self) -> bool {
        self.permissions.iter().any(|p| p == WILDCARD_PERMISSION)
    }

    /// Check whether this role holds a specific capability
    pub fn has_permission(&self, capability: &str) -> bool {
        self.has_wildcard() || self.permissions.iter().any(|p| p == capability)
    }
}

/// Validated, immutable role catalog
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: HashMap<String, Role>,
}

impl RoleCatalog {
    /// Build and validate the catalog from configuration
    pub fn from_config(config: &RbacConfig) -> RbacResult<Self> {
        config.validate()?;

        let mut roles = HashMap::new();
        let mut seen_levels: HashMap<u8, String> = HashMap::new();

        for (name, definition) in &config.standard_roles {
            validate_role_name(name)?;

            if definition.label.is_empty() {
                return Err(RbacError::invalid_config(format!(
                    "role '{}' has an empty label",
                    name
                )));
            }

            if definition.level == 0 {
                return Err(RbacError::invalid_config(format!(
                    "role '{}' must have a level of at least 1",
                    name
                )));
            }

            if let Some(other) = seen_levels.insert(definition.level, name.clone()) {
                return Err(RbacError::invalid_config(format!(
                    "roles '{}' and '{}' share level {}",
                    other, name, definition.level
                )));
            }

            roles.insert(
                name.clone(),
                Role {
                    name: name.clone(),
                    level: definition.level,
                    label: definition.label.clone(),
                    permissions: definition.permissions.clone(),
                },
            );
        }

        Ok(Self { roles })
    }

    /// Get a role by identifier
    pub fn get(&self, name: &str) -> Option<&Role> {
        self.roles.get(name)
    }

    /// Get a role by identifier, failing with `UnknownRole`
    pub fn require(&self, name: &str) -> RbacResult<&Role> {
        self.roles
            .get(name)
            .ok_or_else(|| RbacError::unknown_role(name))
    }

    /// Check whether a role identifier exists
    pub fn contains(&self, name: &str) -> bool {
        self.roles.contains_key(name)
    }

    /// Check whether a role identifier holds the wildcard permission
    ///
    /// Unknown roles hold nothing; this is the fail-closed default.
    pub fn role_has_wildcard(&self, name: &str) -> bool {
        self.roles.get(name).is_some_and(Role::has_wildcard)
    }

    /// All roles ordered by ascending privilege level
    pub fn roles_by_level(&self) -> Vec<&Role> {
        let mut roles: Vec<&Role> = self.roles.values().collect();
        roles.sort_by_key(|r| r.level);
        roles
    }

    /// Check whether role `a` strictly outranks role `b`
    pub fn outranks(&self, a: &str, b: &str) -> RbacResult<bool> {
        let a = self.require(a)?;
        let b = self.require(b)?;
        Ok(a.level > b.level)
    }

    /// Display label for a role identifier, falling back to the identifier
    pub fn label_for(&self, name: &str) -> String {
        self.roles
            .get(name)
            .map(|r| r.label.clone())
            .unwrap_or_else(|| name.to_string())
    }

    /// All role identifiers
    pub fn role_names(&self) -> HashSet<&str> {
        self.roles.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Validate a role identifier
fn validate_role_name(role_name: &str) -> RbacResult<()> {
    if role_name.is_empty() {
        return Err(RbacError::invalid_config("role name cannot be empty"));
    }

    if role_name.len() > 100 {
        return Err(RbacError::invalid_config(
            "role name cannot exceed 100 characters",
        ));
    }

    if !role_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err(RbacError::invalid_config(format!(
            "role name '{}' may only contain alphanumeric characters, underscores, and hyphens",
            role_name
        )));
    }

    Ok(())
}
