use super::request_reader::RequestAction;
use crate::domain::outcome::PaymentOutcome;
use crate::domain::processor::MethodKind;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// One line of output: what was asked, and what came of it.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct OutcomeRecord {
    pub action: RequestAction,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub method: MethodKind,
    pub status: String,
    pub detail: String,
}

impl OutcomeRecord {
    pub fn new(
        action: RequestAction,
        amount: Decimal,
        method: MethodKind,
        outcome: &PaymentOutcome,
    ) -> Self {
        Self {
            action,
            amount,
            method,
            status: outcome.status().to_string(),
            detail: outcome.to_string(),
        }
    }

    /// Record for a refund asked of a processor that cannot refund.
    pub fn unavailable(amount: Decimal, method: MethodKind, error: &PaymentError) -> Self {
        Self {
            action: RequestAction::Refund,
            amount,
            method,
            status: "capability_unavailable".to_string(),
            detail: error.to_string(),
        }
    }
}

enum Target<W: Write> {
    Csv(csv::Writer<W>),
    JsonLines(W),
}

/// Writes outcome records as CSV (with header) or as JSON lines.
pub struct OutcomeWriter<W: Write> {
    target: Target<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn csv(target: W) -> Self {
        Self {
            target: Target::Csv(csv::Writer::from_writer(target)),
        }
    }

    pub fn json_lines(target: W) -> Self {
        Self {
            target: Target::JsonLines(target),
        }
    }

    pub fn write(&mut self, record: &OutcomeRecord) -> Result<()> {
        match &mut self.target {
            Target::Csv(writer) => writer.serialize(record)?,
            Target::JsonLines(writer) => {
                serde_json::to_writer(&mut *writer, record).map_err(std::io::Error::from)?;
                writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.target {
            Target::Csv(writer) => writer.flush()?,
            Target::JsonLines(writer) => writer.flush()?,
        }
        Ok(())
    }
}
