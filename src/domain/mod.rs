//! Domain layer: value types, the payment pipeline and the capability contracts.

pub mod audit;
pub mod masking;
pub mod money;
pub mod outcome;
pub mod ports;
pub mod processor;
