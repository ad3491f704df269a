//! Credit card number classification and Luhn validation.
//!
//! ```
//! assert_eq!(
//!     cardcheck::analyze("4111 1111 1111 1111"),
//!     "VISA: 4111111111111111       (valid)"
//! );
//! ```

mod analysis;
mod digits;
mod issuer;
mod luhn;

pub use analysis::{AnalysisResult, MIN_STAT_INDENT, analyze, inspect};
pub use digits::{DigitError, DigitSequence, normalize};
pub use issuer::{CardType, classify};
pub use luhn::{Validity, checksum, validate};

/// Analyse every line of `text`, one report line per input line.
pub fn analyze_lines(text: &str) -> Vec<String> {
    text.lines().map(analyze).collect()
}
