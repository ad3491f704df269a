use crate::digits::DigitSequence;
use serde::{Deserialize, Serialize};
use std::fmt;

// Labels for the card types as printed out.
pub const LABEL_VISA: &str = "VISA";
pub const LABEL_AMEX: &str = "AMEX";
pub const LABEL_DISCOVER: &str = "Discover";
pub const LABEL_MASTERCARD: &str = "MasterCard";
pub const LABEL_UNKNOWN: &str = "Unknown";

/// Issuer recognized from the leading digits and length of a card number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Visa,
    Amex,
    Discover,
    MasterCard,
    Unknown,
}

impl Default for CardType {
    fn default() -> Self {
        CardType::Unknown
    }
}

impl CardType {
    pub fn label(self) -> &'static str {
        match self {
            CardType::Visa => LABEL_VISA,
            CardType::Amex => LABEL_AMEX,
            CardType::Discover => LABEL_DISCOVER,
            CardType::MasterCard => LABEL_MASTERCARD,
            CardType::Unknown => LABEL_UNKNOWN,
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

type Rule = (fn(&DigitSequence) -> bool, CardType);

/// Issuer rules, tried in order. The first matching predicate decides the
/// type; nothing matching means [`CardType::Unknown`].
static RULES: [Rule; 4] = [
    (is_visa, CardType::Visa),
    (is_amex, CardType::Amex),
    (is_mastercard, CardType::MasterCard),
    (is_discover, CardType::Discover),
];

/// Classify a digit sequence by issuer.
pub fn classify(digits: &DigitSequence) -> CardType {
    RULES
        .iter()
        .find(|(matches, _)| matches(digits))
        .map(|&(_, card_type)| card_type)
        .unwrap_or_default()
}

// 4, 13 or 16 digits
fn is_visa(digits: &DigitSequence) -> bool {
    digits.first() == Some(4) && matches!(digits.len(), 13 | 16)
}

// 34 or 37, 15 digits
fn is_amex(digits: &DigitSequence) -> bool {
    digits.first() == Some(3) && matches!(digits.second(), Some(4 | 7)) && digits.len() == 15
}

// 51 through 55, 16 digits
fn is_mastercard(digits: &DigitSequence) -> bool {
    digits.first() == Some(5) && matches!(digits.second(), Some(1..=5)) && digits.len() == 16
}

// 6011, 16 digits
fn is_discover(digits: &DigitSequence) -> bool {
    digits.starts_with(&[6, 0, 1, 1]) && digits.len() == 16
}
