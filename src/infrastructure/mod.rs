//! Adapters: the concrete payment instruments and the audit sinks.

pub mod in_memory;
pub mod instruments;
pub mod tracing_sink;
