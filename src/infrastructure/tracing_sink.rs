use crate::domain::audit::AuditEntry;
use crate::domain::ports::AuditSink;
use crate::error::Result;
use tracing::info;

/// Audit sink that emits every entry as a `tracing` event on the
/// `paypipe::audit` target. Delivery is up to the installed subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    pub fn new() -> Self {
        Self
    }
}

impl AuditSink for TracingAuditSink {
    fn record(&self, entry: &AuditEntry) -> Result<()> {
        info!(
            target: "paypipe::audit",
            operation = %entry.operation,
            method = %entry.method,
            amount = %entry.amount,
            "{entry}"
        );
        Ok(())
    }
}
