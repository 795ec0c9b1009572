use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why an instrument turned a valid request down.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclineReason {
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Reason carried by a failed outcome.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason", content = "detail")]
pub enum FailureReason {
    /// Amount was zero, negative, or not representable as `Money`.
    #[error("amount must be greater than zero")]
    InvalidAmount,
    /// The execution step refused the request.
    #[error("declined: {0}")]
    Declined(DeclineReason),
}

/// Human-readable output of a successful execution step.
///
/// Instruments render any sensitive identifier masked before it lands here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of a payment or refund attempt.
///
/// Produced fresh by every pipeline run and handed to the caller; processors
/// never keep a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOutcome {
    Succeeded(Confirmation),
    Failed(FailureReason),
}

impl PaymentOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PaymentOutcome::Succeeded(_))
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        match self {
            PaymentOutcome::Succeeded(confirmation) => Some(confirmation),
            PaymentOutcome::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<FailureReason> {
        match self {
            PaymentOutcome::Succeeded(_) => None,
            PaymentOutcome::Failed(reason) => Some(*reason),
        }
    }

    /// Short status label used by the CSV output.
    pub fn status(&self) -> &'static str {
        match self {
            PaymentOutcome::Succeeded(_) => "succeeded",
            PaymentOutcome::Failed(FailureReason::InvalidAmount) => "invalid_amount",
            PaymentOutcome::Failed(FailureReason::Declined(_)) => "declined",
        }
    }
}

impl From<std::result::Result<Confirmation, FailureReason>> for PaymentOutcome {
    fn from(result: std::result::Result<Confirmation, FailureReason>) -> Self {
        match result {
            Ok(confirmation) => PaymentOutcome::Succeeded(confirmation),
            Err(reason) => PaymentOutcome::Failed(reason),
        }
    }
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentOutcome::Succeeded(confirmation) => write!(f, "{confirmation}"),
            PaymentOutcome::Failed(reason) => write!(f, "{reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let ok = PaymentOutcome::Succeeded(Confirmation::new("Charging ****1111 for $1.00"));
        assert!(ok.is_success());
        assert_eq!(ok.failure(), None);
        assert_eq!(ok.status(), "succeeded");

        let declined =
            PaymentOutcome::Failed(FailureReason::Declined(DeclineReason::InsufficientFunds));
        assert!(!declined.is_success());
        assert!(declined.confirmation().is_none());
        assert_eq!(declined.status(), "declined");
        assert_eq!(declined.to_string(), "declined: insufficient funds");
    }

    #[test]
    fn test_outcome_serialization() {
        let failed = PaymentOutcome::Failed(FailureReason::InvalidAmount);
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["failed"]["reason"], "invalid_amount");
    }
}
