use crate::domain::masking::CardNumber;
use crate::domain::money::Money;
use crate::domain::outcome::Confirmation;
use crate::domain::processor::{MethodKind, PaymentMethod, RefundStep, StepResult};
use crate::error::Result;

/// Credit card. Charges always go through; the number is shown masked.
#[derive(Debug, Clone)]
pub struct Card {
    number: CardNumber,
}

impl Card {
    pub fn new(number: &str) -> Result<Self> {
        Ok(Self {
            number: CardNumber::new(number)?,
        })
    }

    pub fn number(&self) -> &CardNumber {
        &self.number
    }
}

impl PaymentMethod for Card {
    fn kind(&self) -> MethodKind {
        MethodKind::Card
    }

    fn execute_payment(&self, amount: Money) -> StepResult {
        Ok(Confirmation::new(format!(
            "Charging {} for ${amount}",
            self.number
        )))
    }

    fn refund_step(&self) -> Option<&dyn RefundStep> {
        Some(self)
    }
}

impl RefundStep for Card {
    fn execute_refund(&self, amount: Money) -> StepResult {
        Ok(Confirmation::new(format!(
            "Refunding ${amount} to {}",
            self.number
        )))
    }
}
