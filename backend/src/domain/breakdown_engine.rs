//! Greedy change computation.
//!
//! The engine walks the denominations from largest to smallest, taking as
//! many of each as fit into what is left of the amount. Because the set
//! always ends with 1, nothing is ever left over.

use tracing::debug;

use super::models::{Breakdown, Denomination, DenominationSet, MonetaryAmount};

/// Break `amount` down into `denominations`, which must be strictly
/// descending. Denominations that are not used do not appear in the result.
pub fn compute_breakdown(amount: MonetaryAmount, denominations: &[Denomination]) -> Breakdown {
    let mut remaining = amount.units();
    let mut breakdown = Breakdown::empty();

    for &denomination in denominations {
        let value = u64::from(denomination.value());
        let count = remaining / value;
        remaining -= count * value;
        debug!("{} x {} (remaining {})", count, denomination, remaining);
        breakdown.push(denomination, count);
    }

    breakdown
}

/// Computes change using the canonical denomination set
#[derive(Debug, Clone, Copy, Default)]
pub struct DenominationBreakdownEngine {
    denominations: DenominationSet,
}

impl DenominationBreakdownEngine {
    pub fn new() -> Self {
        Self {
            denominations: DenominationSet::canonical(),
        }
    }

    pub fn denominations(&self) -> DenominationSet {
        self.denominations
    }

    pub fn compute(&self, amount: MonetaryAmount) -> Breakdown {
        compute_breakdown(amount, self.denominations.as_slice())
    }
}
