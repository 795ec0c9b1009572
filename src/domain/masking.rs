use crate::error::{PaymentError, Result};
use std::fmt;

/// Number of trailing characters left visible by [`mask_identifier`].
pub const VISIBLE_SUFFIX: usize = 4;

const MASK: &str = "****";

/// Redacts everything but the last four characters: `"4111111111111111"` → `"****1111"`.
///
/// Identifiers shorter than the visible suffix are fully redacted.
pub fn mask_identifier(identifier: &str) -> String {
    let count = identifier.chars().count();
    if count < VISIBLE_SUFFIX {
        return MASK.to_string();
    }
    let suffix: String = identifier.chars().skip(count - VISIBLE_SUFFIX).collect();
    format!("{MASK}{suffix}")
}

/// A card number that can only be rendered in masked form.
///
/// Both `Display` and `Debug` go through [`mask_identifier`], so the full number
/// cannot leak through `format!`, `tracing` fields or panic messages.
#[derive(Clone, PartialEq, Eq)]
pub struct CardNumber(String);

impl CardNumber {
    /// Accepts digits separated by optional spaces or dashes; at least 4 digits.
    pub fn new(raw: &str) -> Result<Self> {
        let digits: String = raw
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(PaymentError::InvalidCredential(
                "Card number must contain only digits".to_string(),
            ));
        }
        if digits.len() < VISIBLE_SUFFIX {
            return Err(PaymentError::InvalidCredential(format!(
                "Card number must have at least {VISIBLE_SUFFIX} digits"
            )));
        }
        Ok(Self(digits))
    }

    pub fn masked(&self) -> String {
        mask_identifier(&self.0)
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CardNumber").field(&self.masked()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_identifier() {
        assert_eq!(mask_identifier("4111111111111111"), "****1111");
        assert_eq!(mask_identifier("1234"), "****1234");
        assert_eq!(mask_identifier("123"), "****");
    }

    #[test]
    fn test_card_number_strips_separators() {
        let card = CardNumber::new("4111 1111-1111 1234").unwrap();
        assert_eq!(card.masked(), "****1234");
    }

    #[test]
    fn test_card_number_rejects_invalid() {
        assert!(matches!(
            CardNumber::new("41x1"),
            Err(PaymentError::InvalidCredential(_))
        ));
        assert!(matches!(
            CardNumber::new("123"),
            Err(PaymentError::InvalidCredential(_))
        ));
        assert!(CardNumber::new("  ").is_err());
    }

    #[test]
    fn test_card_number_never_formats_in_full() {
        let full = "5500000000000004";
        let card = CardNumber::new(full).unwrap();
        assert!(!format!("{card}").contains(full));
        assert!(!format!("{card:?}").contains(full));
        assert!(format!("{card:?}").contains("****0004"));
    }
}
