use crate::domain::masking::CardNumber;
use crate::domain::money::Money;
use crate::domain::outcome::{Confirmation, DeclineReason, FailureReason};
use crate::domain::processor::{MethodKind, PaymentMethod, RefundStep, StepResult};
use crate::error::Result;

/// Debit card, optionally backed by a known available balance.
///
/// The balance is fixed at construction and only compared against, never
/// decremented: each call is judged on its own.
#[derive(Debug, Clone)]
pub struct DebitCard {
    number: CardNumber,
    available_funds: Option<Money>,
}

impl DebitCard {
    pub fn new(number: &str) -> Result<Self> {
        Ok(Self {
            number: CardNumber::new(number)?,
            available_funds: None,
        })
    }

    /// Declines any payment above `funds`.
    pub fn with_available_funds(mut self, funds: Money) -> Self {
        self.available_funds = Some(funds);
        self
    }

    pub fn available_funds(&self) -> Option<Money> {
        self.available_funds
    }
}

impl PaymentMethod for DebitCard {
    fn kind(&self) -> MethodKind {
        MethodKind::DebitCard
    }

    fn execute_payment(&self, amount: Money) -> StepResult {
        if self
            .available_funds
            .is_some_and(|funds| funds.checked_sub(amount).is_none())
        {
            return Err(FailureReason::Declined(DeclineReason::InsufficientFunds));
        }
        Ok(Confirmation::new(format!(
            "Processing Debit Card payment of ${amount} for card: {}",
            self.number
        )))
    }

    fn refund_step(&self) -> Option<&dyn RefundStep> {
        Some(self)
    }
}

impl RefundStep for DebitCard {
    fn execute_refund(&self, amount: Money) -> StepResult {
        Ok(Confirmation::new(format!(
            "Processing Debit Card refund of ${amount} for card: {}",
            self.number
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_debit_output_masks_number() {
        let debit = DebitCard::new("6011000990139424").unwrap();
        let confirmation = debit
            .execute_payment(Money::new(dec!(300)).unwrap())
            .unwrap();

        assert_eq!(
            confirmation.message,
            "Processing Debit Card payment of $300.00 for card: ****9424"
        );
    }

    #[test]
    fn test_debit_without_limit_always_succeeds() {
        let debit = DebitCard::new("6011000990139424").unwrap();
        assert!(
            debit
                .execute_payment(Money::new(dec!(1000000)).unwrap())
                .is_ok()
        );
    }

    #[test]
    fn test_debit_declines_above_available_funds() {
        let debit = DebitCard::new("6011000990139424")
            .unwrap()
            .with_available_funds(Money::new(dec!(100)).unwrap());

        assert!(debit.execute_payment(Money::new(dec!(100)).unwrap()).is_ok());
        assert_eq!(
            debit.execute_payment(Money::new(dec!(100.01)).unwrap()),
            Err(FailureReason::Declined(DeclineReason::InsufficientFunds))
        );
        // the limit is not consumed by earlier calls
        assert!(debit.execute_payment(Money::new(dec!(60)).unwrap()).is_ok());
        assert!(debit.execute_payment(Money::new(dec!(60)).unwrap()).is_ok());
    }

    #[test]
    fn test_debit_refund_ignores_available_funds() {
        let debit = DebitCard::new("6011000990139424")
            .unwrap()
            .with_available_funds(Money::new(dec!(1)).unwrap());

        assert!(debit.execute_refund(Money::new(dec!(50)).unwrap()).is_ok());
    }
}
