use serde::{Deserialize, Serialize};
use std::fmt;

pub const STATUS_VALID: &str = "valid";
pub const STATUS_INVALID: &str = "invalid";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }

    pub fn label(self) -> &'static str {
        match self {
            Validity::Valid => STATUS_VALID,
            Validity::Invalid => STATUS_INVALID,
        }
    }
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Luhn sum over `digits` (leftmost first, each `0..=9`).
///
/// Positions are counted from the rightmost digit, which is position 0.
/// Digits at odd positions are doubled and their decimal digits summed;
/// `(d * 2) % 9` gives that sum for every digit except 9, which maps to 9.
pub fn checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 1 {
                if d == 9 { 9 } else { (d * 2) % 9 }
            } else {
                d
            }
        })
        .sum()
}

pub fn validate(digits: &[u8]) -> Validity {
    Validity::from(checksum(digits) % 10 == 0)
}
