use super::money::Money;
use super::processor::MethodKind;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Payment,
    Refund,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Payment => f.write_str("payment"),
            Operation::Refund => f.write_str("refund"),
        }
    }
}

/// One line of the audit trail: an attempt that passed validation.
///
/// Carries the instrument kind only, never its credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub operation: Operation,
    pub method: MethodKind,
    pub amount: Money,
}

impl AuditEntry {
    pub fn new(operation: Operation, method: MethodKind, amount: Money) -> Self {
        Self {
            operation,
            method,
            amount,
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processing {} of ${} via {}",
            self.operation, self.amount, self.method
        )
    }
}
