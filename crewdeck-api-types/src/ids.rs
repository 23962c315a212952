use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque employee identifier as issued by the directory collaborator
///
/// The hosted directory hands out string keys that are sometimes numeric and
/// sometimes UUIDs depending on tenant age, so the ID is kept as an opaque
/// string and only parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    /// Create from a raw string key
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create from a legacy numeric directory ID
    pub fn from_i64(id: i64) -> Self {
        Self(id.to_string())
    }

    /// Get as string (always available)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Try to parse as a legacy numeric ID
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    /// Try to parse as UUID
    pub fn as_uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.0).ok()
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EmployeeId {
    fn from(id: i64) -> Self {
        Self::from_i64(id)
    }
}

impl From<Uuid> for EmployeeId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }
}

impl From<String> for EmployeeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EmployeeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
