//! Audit export interface
//!
//! The export collaborator renders ordered audit rows to a downloadable
//! delimited file. The file format is outside the core's contract; the sink
//! trait only guarantees it receives rows in the order the log reports them.

use crewdeck_api_types::AuditRow;

/// Common export error type
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Export destination unavailable: {message}")]
    Unavailable { message: String },

    #[error("Export write failed: {message}")]
    WriteFailed { message: String },
}

impl ExportError {
    /// Create a new write-failed error
    pub fn write_failed(message: impl Into<String>) -> Self {
        Self::WriteFailed {
            message: message.into(),
        }
    }
}

/// Consumer of ordered audit rows
pub trait AuditExportSink: Send {
    /// Write a batch of rows, preserving the given order
    fn write_rows(&mut self, rows: &[AuditRow]) -> Result<(), ExportError>;
}

impl<F> AuditExportSink for F
where
    F: FnMut(&[AuditRow]) -> Result<(), ExportError> + Send,
{
    fn write_rows(&mut self, rows: &[AuditRow]) -> Result<(), ExportError> {
        self(rows)
    }
}
