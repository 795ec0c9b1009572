use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum RequestAction {
    Payment,
    Refund,
}

/// One row of the input file.
///
/// `amount` is kept as the raw decimal, parsed from the field's text so no digit
/// or trailing zero is lost; the payment pipeline decides whether it is acceptable.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub action: RequestAction,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Reads payment requests from a CSV source with an `action,amount` header.
pub struct PaymentRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentRequestReader<R> {
    /// Creates a new `PaymentRequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "action, amount\npayment, 100.00\nrefund, 20";
        let reader = PaymentRequestReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest>> = reader.requests().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.action, RequestAction::Payment);
        assert_eq!(first.amount, dec!(100.00));
        assert_eq!(results[1].as_ref().unwrap().action, RequestAction::Refund);
    }

    #[test]
    fn test_reader_keeps_non_positive_amounts() {
        let data = "action,amount\npayment,-5.00\npayment,0";
        let reader = PaymentRequestReader::new(data.as_bytes());
        let amounts: Vec<Decimal> = reader.requests().map(|r| r.unwrap().amount).collect();

        assert_eq!(amounts, vec![dec!(-5.00), dec!(0)]);
    }

    #[test]
    fn test_reader_keeps_amounts_exact() {
        let data = "action,amount\npayment,12345678901234567.89\npayment,120.50";
        let reader = PaymentRequestReader::new(data.as_bytes());
        let amounts: Vec<Decimal> = reader.requests().map(|r| r.unwrap().amount).collect();

        assert_eq!(amounts, vec![dec!(12345678901234567.89), dec!(120.50)]);
        assert_eq!(amounts[0].to_string(), "12345678901234567.89");
        assert_eq!(amounts[1].to_string(), "120.50");
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "action,amount\ntransfer,1.0\npayment,abc\npayment,";
        let reader = PaymentRequestReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest>> = reader.requests().collect();

        assert!(results[0].is_err());
        assert!(results[1].is_err());
        assert!(results[2].is_err());
    }
}
