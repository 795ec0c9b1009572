use crate::domain::outcome::PaymentOutcome;
use crate::domain::processor::{MethodKind, Refundable, SharedProcessor};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;

/// Drives checkouts through whichever processor it was given.
///
/// `CheckoutService` only knows the `PaymentProcessor` contract; swapping the
/// instrument means constructing it with a different processor.
pub struct CheckoutService {
    processor: SharedProcessor,
}

impl CheckoutService {
    /// Creates a new `CheckoutService` bound to `processor` for its whole lifetime.
    pub fn new(processor: SharedProcessor) -> Self {
        Self { processor }
    }

    pub fn method(&self) -> MethodKind {
        self.processor.kind()
    }

    /// Charges `amount` through the held processor.
    pub fn checkout(&self, amount: Decimal) -> PaymentOutcome {
        self.processor.process_payment(amount)
    }

    /// Refunds `amount` if the held processor supports refunds.
    ///
    /// Returns `PaymentError::CapabilityUnavailable` without touching the
    /// processor when it does not.
    pub fn refund(&self, amount: Decimal) -> Result<PaymentOutcome> {
        let handle = self
            .processor
            .refunds()
            .ok_or(PaymentError::CapabilityUnavailable(self.processor.kind()))?;
        Ok(handle.process_refund(amount))
    }
}
