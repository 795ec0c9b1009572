//! Application layer containing the checkout orchestration.
//!
//! `CheckoutService` is the entry point used by callers: it holds exactly one
//! processor and forwards payments (and, when available, refunds) to it.

pub mod checkout;
