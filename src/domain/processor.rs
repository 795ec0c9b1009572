//! The payment pipeline and the contracts built on top of it.
//!
//! Every attempt runs the same three steps in a fixed order:
//!
//! 1. validate: the requested amount must be a positive `Money`, otherwise the
//!    attempt stops with `Failed(InvalidAmount)` and nothing else happens;
//! 2. audit: one [`AuditEntry`] is handed to the [`AuditSink`];
//! 3. execute: the instrument's own step decides the outcome.
//!
//! Instruments only supply step 3 through [`PaymentMethod`] (and optionally
//! [`RefundStep`]). [`Processor`] wraps a method together with an audit sink and
//! is the only type allowed to implement [`PaymentProcessor`], so the order above
//! cannot be bypassed.

use super::audit::{AuditEntry, Operation};
use super::money::Money;
use super::outcome::{Confirmation, FailureReason, PaymentOutcome};
use super::ports::{AuditSink, SharedAuditSink};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// The kind of instrument behind a processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodKind {
    #[serde(rename = "card")]
    Card,
    #[serde(rename = "debit_card")]
    DebitCard,
    #[serde(rename = "paypal")]
    PayPal,
    #[serde(rename = "upi")]
    Upi,
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MethodKind::Card => "card",
            MethodKind::DebitCard => "debit card",
            MethodKind::PayPal => "paypal",
            MethodKind::Upi => "upi",
        };
        f.write_str(name)
    }
}

/// What an instrument-specific step returns.
pub type StepResult = std::result::Result<Confirmation, FailureReason>;

/// The instrument-specific execution step.
///
/// `execute_payment` is only ever called with an amount that already passed
/// validation and has been audited.
pub trait PaymentMethod: Send + Sync {
    fn kind(&self) -> MethodKind;

    fn execute_payment(&self, amount: Money) -> StepResult;

    /// Runtime view of the refund capability: `Some(self)` exactly when the
    /// method implements [`RefundStep`], `None` otherwise.
    fn refund_step(&self) -> Option<&dyn RefundStep>;
}

/// The instrument-specific refund step.
pub trait RefundStep: Send + Sync {
    fn execute_refund(&self, amount: Money) -> StepResult;
}

fn validate(amount: Decimal) -> std::result::Result<Money, FailureReason> {
    match Money::new(amount) {
        Ok(money) if money.is_positive() => Ok(money),
        _ => Err(FailureReason::InvalidAmount),
    }
}

/// Runs validate → audit → `execute` for one attempt.
///
/// Audit sink failures are logged and swallowed.
pub fn run_pipeline<F>(
    operation: Operation,
    method: MethodKind,
    amount: Decimal,
    audit: &dyn AuditSink,
    execute: F,
) -> PaymentOutcome
where
    F: FnOnce(Money) -> StepResult,
{
    let amount = match validate(amount) {
        Ok(money) => money,
        Err(reason) => {
            debug!(%operation, %method, %amount, "rejected before audit");
            return PaymentOutcome::Failed(reason);
        }
    };

    let entry = AuditEntry::new(operation, method, amount);
    if let Err(e) = audit.record(&entry) {
        warn!(%operation, %method, error = %e, "audit sink failed to record entry");
    }

    let outcome = PaymentOutcome::from(execute(amount));
    debug!(%operation, %method, %amount, status = outcome.status(), "attempt finished");
    outcome
}

mod sealed {
    pub trait Sealed {}

    impl<M: super::PaymentMethod> Sealed for super::Processor<M> {}
}

/// The contract every payment processor exposes.
///
/// Sealed: the only implementor is [`Processor`], which always goes through
/// [`run_pipeline`].
pub trait PaymentProcessor: sealed::Sealed + Send + Sync {
    fn kind(&self) -> MethodKind;

    fn process_payment(&self, amount: Decimal) -> PaymentOutcome;

    /// Returns a refund handle when this processor supports refunds.
    fn refunds(&self) -> Option<RefundHandle<'_>>;

    fn supports_refunds(&self) -> bool {
        self.refunds().is_some()
    }
}

pub type SharedProcessor = Arc<dyn PaymentProcessor>;

/// The refund capability.
pub trait Refundable {
    fn process_refund(&self, amount: Decimal) -> PaymentOutcome;
}

/// A processor: one instrument bound to the audit sink it reports to.
///
/// Holds no per-call state, so a single instance can serve any number of
/// independent calls, from any number of threads.
pub struct Processor<M> {
    method: M,
    audit: SharedAuditSink,
}

impl<M: PaymentMethod> Processor<M> {
    pub fn new(method: M, audit: SharedAuditSink) -> Self {
        Self { method, audit }
    }

    pub fn method(&self) -> &M {
        &self.method
    }

    /// Erases the instrument type.
    pub fn shared(self) -> SharedProcessor
    where
        M: 'static,
    {
        Arc::new(self)
    }
}

impl<M: PaymentMethod> PaymentProcessor for Processor<M> {
    fn kind(&self) -> MethodKind {
        self.method.kind()
    }

    fn process_payment(&self, amount: Decimal) -> PaymentOutcome {
        run_pipeline(
            Operation::Payment,
            self.method.kind(),
            amount,
            self.audit.as_ref(),
            |money| self.method.execute_payment(money),
        )
    }

    fn refunds(&self) -> Option<RefundHandle<'_>> {
        self.method.refund_step().map(|step| RefundHandle {
            method: self.method.kind(),
            step,
            audit: self.audit.as_ref(),
        })
    }
}

impl<M: PaymentMethod + RefundStep> Refundable for Processor<M> {
    fn process_refund(&self, amount: Decimal) -> PaymentOutcome {
        run_pipeline(
            Operation::Refund,
            self.method.kind(),
            amount,
            self.audit.as_ref(),
            |money| self.method.execute_refund(money),
        )
    }
}

/// Refund capability obtained at runtime from [`PaymentProcessor::refunds`].
pub struct RefundHandle<'a> {
    method: MethodKind,
    step: &'a dyn RefundStep,
    audit: &'a dyn AuditSink,
}

impl RefundHandle<'_> {
    pub fn kind(&self) -> MethodKind {
        self.method
    }
}

impl Refundable for RefundHandle<'_> {
    fn process_refund(&self, amount: Decimal) -> PaymentOutcome {
        run_pipeline(Operation::Refund, self.method, amount, self.audit, |money| {
            self.step.execute_refund(money)
        })
    }
}
