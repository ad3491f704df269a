use crate::digits::{DigitSequence, normalize};
use crate::issuer::{CardType, classify};
use crate::luhn::{self, Validity};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column (0-based) at which the `(` of the validity marker starts, so that
/// results printed one per line stay lined up.
pub const MIN_STAT_INDENT: usize = 29;

/// Outcome of analysing one candidate card number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    card_type: CardType,
    number: String,
    validity: Validity,
}

impl AnalysisResult {
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    /// The card number with all whitespace removed.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// `"{type}: {number}"`, the part printed before the padding.
    pub fn prologue(&self) -> String {
        format!("{}: {}", self.card_type, self.number)
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prologue = self.prologue();
        let padding = MIN_STAT_INDENT
            .saturating_sub(prologue.chars().count())
            .max(1);
        write!(f, "{}{}({})", prologue, " ".repeat(padding), self.validity)
    }
}

/// Strip whitespace from `raw`, identify the issuer and run the Luhn check.
///
/// Never fails: input with anything other than ASCII digits left after
/// stripping is reported as `Unknown` and `invalid`, and so is input that
/// strips down to nothing.
pub fn inspect(raw: &str) -> AnalysisResult {
    let number = normalize(raw);
    let digits = match DigitSequence::parse(&number) {
        Ok(digits) if !digits.is_empty() => digits,
        Ok(_) => {
            trace!("no digits in {:?}", raw);
            return unknown_invalid(number);
        }
        Err(err) => {
            trace!("rejecting {:?}: {}", number, err);
            return unknown_invalid(number);
        }
    };
    let card_type = classify(&digits);
    let validity = luhn::validate(&digits);
    trace!("{} classified as {:?}, {}", number, card_type, validity);
    AnalysisResult {
        card_type,
        number,
        validity,
    }
}

/// Analyse a candidate card number and return the aligned report line,
/// e.g. `VISA: 4111111111111111       (valid)`.
pub fn analyze(raw: &str) -> String {
    inspect(raw).to_string()
}

fn unknown_invalid(number: String) -> AnalysisResult {
    AnalysisResult {
        card_type: CardType::Unknown,
        number,
        validity: Validity::Invalid,
    }
}
