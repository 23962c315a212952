//! # Crewdeck Interfaces
//!
//! Collaborator traits for the Crewdeck RBAC core.
//!
//! The core itself never performs I/O: the employee directory is fetched
//! before a session is constructed, and audit export consumes an already
//! ordered row sequence. This crate is the neutral ground where those
//! contracts live, so the core and its hosts can depend on them without
//! depending on each other.
//!
//! ## Main interfaces
//!
//! - [`EmployeeDirectory`] - read-only snapshot source for session startup
//! - [`AuditExportSink`] - consumer of ordered audit rows

pub mod directory;
pub mod export;

// Re-export commonly used types
pub use directory::{DirectoryError, EmployeeDirectory};
pub use export::{AuditExportSink, ExportError};
