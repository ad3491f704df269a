use std::ops::Deref;
use thiserror::Error;

/// A card number reduced to its decimal digits, leftmost digit first.
/// Each entry is guaranteed to be in `0..=9`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigitSequence(Vec<u8>);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DigitError {
    #[error("not a digit: '{ch}' (U+{code:04X}) at position {position}")]
    NotADigit { ch: char, code: u32, position: usize },
}

impl DigitSequence {
    /// Parse an already-normalized string. Only ASCII `0`..`9` are accepted;
    /// other Unicode decimal digits are rejected.
    pub fn parse(normalized: &str) -> Result<Self, DigitError> {
        let mut digits = Vec::with_capacity(normalized.len());
        for (position, ch) in normalized.chars().enumerate() {
            if !ch.is_ascii_digit() {
                return Err(DigitError::NotADigit {
                    ch,
                    code: ch as u32,
                    position,
                });
            }
            digits.push(ch as u8 - b'0');
        }
        Ok(Self(digits))
    }

    pub fn first(&self) -> Option<u8> {
        self.0.first().copied()
    }

    pub fn second(&self) -> Option<u8> {
        self.0.get(1).copied()
    }

    /// True when the sequence begins with the given digits.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }
}

impl Deref for DigitSequence {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

/// Remove every whitespace character (Unicode `White_Space`), keeping the
/// order of everything else.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}
