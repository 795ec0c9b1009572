use crate::domain::money::Money;
use crate::domain::outcome::Confirmation;
use crate::domain::processor::{MethodKind, PaymentMethod, RefundStep, StepResult};
use crate::error::{PaymentError, Result};

/// PayPal account, identified by its email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayPal {
    email: String,
}

impl PayPal {
    pub fn new(email: &str) -> Result<Self> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(PaymentError::InvalidCredential(format!(
                "'{email}' is not a valid email address"
            )));
        }
        Ok(Self {
            email: email.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Accepts `local@domain.tld` where the TLD has at least two letters.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'));
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    local_ok && host_ok && tld_ok
}

impl PaymentMethod for PayPal {
    fn kind(&self) -> MethodKind {
        MethodKind::PayPal
    }

    fn execute_payment(&self, amount: Money) -> StepResult {
        Ok(Confirmation::new(format!(
            "Processing PayPal payment of ${amount} for account: {}",
            self.email
        )))
    }

    fn refund_step(&self) -> Option<&dyn RefundStep> {
        Some(self)
    }
}

impl RefundStep for PayPal {
    fn execute_refund(&self, amount: Money) -> StepResult {
        Ok(Confirmation::new(format!(
            "Processing PayPal refund of ${amount} for account: {}",
            self.email
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_email_validation() {
        assert!(PayPal::new("user@example.com").is_ok());
        assert!(PayPal::new("first.last+shop@mail.example.co").is_ok());
        assert!(PayPal::new("user@example").is_err());
        assert!(PayPal::new("@example.com").is_err());
        assert!(PayPal::new("user@.com").is_err());
        assert!(PayPal::new("user example.com").is_err());
        assert!(PayPal::new("user@example.c").is_err());
    }

    #[test]
    fn test_paypal_refund_references_account() {
        let paypal = PayPal::new("user@example.com").unwrap();
        let confirmation = paypal
            .execute_refund(Money::new(dec!(20)).unwrap())
            .unwrap();

        assert_eq!(
            confirmation.message,
            "Processing PayPal refund of $20.00 for account: user@example.com"
        );
    }
}
