//! Error types for RBAC operations

use crewdeck_api_types::EmployeeId;
use thiserror::Error;

/// Result type for RBAC operations
pub type RbacResult<T> = Result<T, RbacError>;

/// RBAC-specific errors
///
/// All conditions are local and recoverable; none is fatal to the hosting
/// process. A failed mutation leaves session state unchanged.
#[derive(Error, Debug)]
pub enum RbacError {
    /// Acting or target user is not in the session working set
    #[error("Subject not found: {user_id}")]
    SubjectNotFound { user_id: EmployeeId },

    /// Role identifier is not present in the role catalog
    #[error("Unknown role: {role_name}")]
    UnknownRole { role_name: String },

    /// Acting principal lacks the privilege for the operation
    #[error("Forbidden: {actor} may not perform {action}")]
    Forbidden { actor: String, action: String },

    /// Emergency override requested without a justification
    #[error("Emergency override requires a non-empty justification")]
    MissingJustification,

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Configuration file could not be read
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RbacError {
    /// Create a new subject-not-found error
    pub fn subject_not_found(user_id: impl Into<EmployeeId>) -> Self {
        Self::SubjectNotFound {
            user_id: user_id.into(),
        }
    }

    /// Create a new unknown-role error
    pub fn unknown_role(role_name: impl Into<String>) -> Self {
        Self::UnknownRole {
            role_name: role_name.into(),
        }
    }

    /// Create a new forbidden error
    pub fn forbidden(actor: impl Into<String>, action: impl Into<String>) -> Self {
        Self::Forbidden {
            actor: actor.into(),
            action: action.into(),
        }
    }

    /// Create a new invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SubjectNotFound { .. } | Self::UnknownRole { .. }
        )
    }

    /// Check if this is an authorization failure
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }
}
