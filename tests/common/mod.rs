#![allow(dead_code)]

use paypipe::domain::ports::SharedAuditSink;
use paypipe::domain::processor::{Processor, SharedProcessor};
use paypipe::infrastructure::instruments::{Card, DebitCard, PayPal, Upi};
use std::io::Error;
use std::path::Path;

pub const CARD_NUMBER: &str = "4111111111111111";
pub const DEBIT_NUMBER: &str = "6011000990139424";
pub const PAYPAL_EMAIL: &str = "user@example.com";

/// One processor per instrument, all reporting to `audit`.
pub fn all_processors(audit: SharedAuditSink) -> Vec<SharedProcessor> {
    vec![
        Processor::new(Card::new(CARD_NUMBER).unwrap(), audit.clone()).shared(),
        Processor::new(DebitCard::new(DEBIT_NUMBER).unwrap(), audit.clone()).shared(),
        Processor::new(PayPal::new(PAYPAL_EMAIL).unwrap(), audit.clone()).shared(),
        Processor::new(Upi::new(), audit).shared(),
    ]
}

pub fn write_requests(path: &Path, rows: &[(&str, &str)]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["action", "amount"])?;
    for (action, amount) in rows {
        wtr.write_record([action, amount])?;
    }
    wtr.flush()?;
    Ok(())
}
