use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative amount of money in whole currency units
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonetaryAmount(u64);

impl MonetaryAmount {
    pub const ZERO: MonetaryAmount = MonetaryAmount(0);

    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    pub const fn units(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for MonetaryAmount {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
