use crate::domain::money::Money;
use crate::domain::outcome::Confirmation;
use crate::domain::processor::{MethodKind, PaymentMethod, RefundStep, StepResult};
use crate::error::{PaymentError, Result};

/// UPI transfer, optionally tied to a virtual payment address (`handle@provider`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Upi {
    vpa: Option<String>,
}

impl Upi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vpa(vpa: &str) -> Result<Self> {
        let vpa = vpa.trim();
        let valid = vpa.split_once('@').is_some_and(|(handle, provider)| {
            !handle.is_empty()
                && !provider.is_empty()
                && handle
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
                && provider.chars().all(|c| c.is_ascii_alphanumeric())
        });
        if !valid {
            return Err(PaymentError::InvalidCredential(format!(
                "'{vpa}' is not a valid UPI address"
            )));
        }
        Ok(Self {
            vpa: Some(vpa.to_string()),
        })
    }

    pub fn vpa(&self) -> Option<&str> {
        self.vpa.as_deref()
    }

    fn render(&self, action: &str, amount: Money) -> String {
        match &self.vpa {
            Some(vpa) => format!("Processing UPI {action} of ${amount} for {vpa}"),
            None => format!("Processing UPI {action} of ${amount}"),
        }
    }
}

impl PaymentMethod for Upi {
    fn kind(&self) -> MethodKind {
        MethodKind::Upi
    }

    fn execute_payment(&self, amount: Money) -> StepResult {
        Ok(Confirmation::new(self.render("payment", amount)))
    }

    fn refund_step(&self) -> Option<&dyn RefundStep> {
        Some(self)
    }
}

impl RefundStep for Upi {
    fn execute_refund(&self, amount: Money) -> StepResult {
        Ok(Confirmation::new(self.render("refund", amount)))
    }
}
