use crate::domain::audit::AuditEntry;
use crate::domain::ports::AuditSink;
use crate::error::{PaymentError, Result};
use std::sync::{Arc, RwLock};

/// A thread-safe in-memory audit sink.
///
/// Uses `Arc<RwLock<Vec<AuditEntry>>>` so clones share the same trail.
/// Ideal for testing or for callers that inspect the trail after a run.
#[derive(Default, Clone)]
pub struct InMemoryAuditSink {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
}

impl InMemoryAuditSink {
    /// Creates a new, empty in-memory audit sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every entry recorded so far, oldest first.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&self, entry: &AuditEntry) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| PaymentError::AuditError("audit trail lock poisoned".to_string()))?;
        entries.push(entry.clone());
        Ok(())
    }
}
