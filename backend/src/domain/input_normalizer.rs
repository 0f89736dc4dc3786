//! Amount parsing for the change calculator.
//!
//! Raw text from the amount field is turned into a whole-unit
//! [`MonetaryAmount`] here, before any arithmetic happens. Anything that is
//! not a non-negative number is rejected with a named [`ValidationFailure`].

use shared::ChangeCalculatorConfig;
use thiserror::Error;
use tracing::{debug, warn};

use super::models::MonetaryAmount;

/// Why a raw amount could not be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// The input is not a number, or not one that fits in whole units
    #[error("'{0}' is not a valid amount")]
    NotANumber(String),
    #[error("'{0}' is negative")]
    Negative(String),
}

/// Converts user-entered text into a validated amount
#[derive(Debug, Clone)]
pub struct InputNormalizer {
    currency_symbol: String,
}

impl InputNormalizer {
    pub fn new() -> Self {
        Self::with_config(&ChangeCalculatorConfig::default())
    }

    pub fn with_config(config: &ChangeCalculatorConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    /// Normalize raw input into a whole-unit amount.
    ///
    /// Blank input is a valid amount of zero. Fractions are truncated toward
    /// zero, so "12.9" becomes 12.
    pub fn normalize(&self, raw: &str) -> Result<MonetaryAmount, ValidationFailure> {
        let cleaned = self.strip_currency_symbol(raw);

        if cleaned.is_empty() {
            debug!("Blank amount input, treating as zero");
            return Ok(MonetaryAmount::ZERO);
        }

        let value: f64 = match cleaned.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Rejected amount input {:?}: not a number", raw);
                return Err(ValidationFailure::NotANumber(cleaned.to_string()));
            }
        };

        // -inf and values like -1e400 are still negative numbers.
        if value < 0.0 {
            warn!("Rejected amount input {:?}: negative", raw);
            return Err(ValidationFailure::Negative(cleaned.to_string()));
        }

        if !value.is_finite() {
            warn!("Rejected amount input {:?}: not a finite number", raw);
            return Err(ValidationFailure::NotANumber(cleaned.to_string()));
        }

        let units = match exact_whole_units(cleaned) {
            Some(units) => units,
            None => float_whole_units(value),
        };

        match units {
            Some(units) => {
                debug!("Normalized amount input {:?} to {} units", raw, units);
                Ok(MonetaryAmount::new(units))
            }
            None => {
                warn!("Rejected amount input {:?}: out of range", raw);
                Err(ValidationFailure::NotANumber(cleaned.to_string()))
            }
        }
    }

    /// Trim whitespace and a leading or trailing currency symbol
    fn strip_currency_symbol<'a>(&self, raw: &'a str) -> &'a str {
        let trimmed = raw.trim();
        if self.currency_symbol.is_empty() {
            return trimmed;
        }
        let trimmed = trimmed
            .strip_suffix(self.currency_symbol.as_str())
            .unwrap_or(trimmed);
        let trimmed = trimmed
            .strip_prefix(self.currency_symbol.as_str())
            .unwrap_or(trimmed);
        trimmed.trim()
    }
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Integer part of a plain decimal ("+123.45"), read without going through
/// floating point. `None` when the text is not plain decimal; `Some(None)`
/// when it is but does not fit in a `u64`.
fn exact_whole_units(text: &str) -> Option<Option<u64>> {
    let unsigned = text.strip_prefix('+').unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    if int_part.is_empty() {
        return Some(Some(0));
    }
    Some(int_part.parse::<u64>().ok())
}

/// Truncate a finite, non-negative float to whole units
fn float_whole_units(value: f64) -> Option<u64> {
    let truncated = value.trunc();
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range.
    if truncated < u64::MAX as f64 {
        Some(truncated as u64)
    } else {
        None
    }
}
