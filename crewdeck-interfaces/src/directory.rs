//! Employee directory interface
//!
//! The directory is owned by the hosted backend. The RBAC core reads one
//! snapshot at session start and never writes back through this interface;
//! role changes patch the session working copy only.

use async_trait::async_trait;
use crewdeck_api_types::{EmployeeId, UnifiedEmployee};

/// Common directory error type
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Directory unavailable: {message}")]
    Unavailable { message: String },

    #[error("Employee not found: {id}")]
    NotFound { id: EmployeeId },

    #[error("Malformed directory record: {message}")]
    Malformed { message: String },

    #[error("Internal directory error: {message}")]
    Internal { message: String },
}

impl DirectoryError {
    /// Create a new unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a new malformed-record error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Read-only employee directory
///
/// Implementations live in consumers; the integration tests ship an
/// in-memory one.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Check if the directory is healthy and can serve requests
    async fn health_check(&self) -> Result<(), DirectoryError>;

    /// Fetch the full employee snapshot for session startup
    async fn get_all_employees(&self) -> Result<Vec<UnifiedEmployee>, DirectoryError>;

    /// Fetch a single employee by ID
    async fn get_employee(&self, id: &EmployeeId) -> Result<UnifiedEmployee, DirectoryError> {
        let employees = self.get_all_employees().await?;
        employees
            .into_iter()
            .find(|e| &e.id == id)
            .ok_or_else(|| DirectoryError::NotFound { id: id.clone() })
    }
}
