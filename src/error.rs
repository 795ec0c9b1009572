use crate::domain::processor::MethodKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
    #[error("{0} does not support refunds")]
    CapabilityUnavailable(MethodKind),
    #[error("Audit error: {0}")]
    AuditError(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
