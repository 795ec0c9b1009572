use super::audit::AuditEntry;
use crate::error::Result;
use std::sync::Arc;

/// Write-only side channel receiving one entry per validated attempt.
///
/// Implementations must tolerate concurrent `record` calls. An `Err` is reported
/// by the pipeline and otherwise ignored; it never changes an outcome.
pub trait AuditSink: Send + Sync {
    fn record(&self, entry: &AuditEntry) -> Result<()>;
}

pub type SharedAuditSink = Arc<dyn AuditSink>;
