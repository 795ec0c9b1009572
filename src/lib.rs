//! A payment-processing core: a fixed validate → audit → execute pipeline shared
//! by every instrument, an optional refund capability, and a checkout service
//! that depends only on the processor contract.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
