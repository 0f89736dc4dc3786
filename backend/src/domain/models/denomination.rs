use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A note or coin value in whole currency units.
///
/// Only values from the canonical set exist; deserializing anything else
/// fails.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Denomination(u32);

impl Denomination {
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not a canonical denomination")]
pub struct InvalidDenomination(pub u32);

impl TryFrom<u32> for Denomination {
    type Error = InvalidDenomination;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        CANONICAL
            .iter()
            .copied()
            .find(|d| d.0 == value)
            .ok_or(InvalidDenomination(value))
    }
}

impl From<Denomination> for u32 {
    fn from(denomination: Denomination) -> Self {
        denomination.0
    }
}

/// Canonical notes and coins, largest first
static CANONICAL: [Denomination; 10] = [
    Denomination(1000),
    Denomination(500),
    Denomination(200),
    Denomination(100),
    Denomination(50),
    Denomination(20),
    Denomination(10),
    Denomination(5),
    Denomination(2),
    Denomination(1),
];

/// The fixed, strictly descending set of denominations change is made from.
///
/// Only the canonical set can be constructed. Greedy reduction is
/// minimum-count for this set; that property does not carry over to
/// arbitrary sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenominationSet {
    values: &'static [Denomination],
}

impl DenominationSet {
    pub fn canonical() -> Self {
        Self { values: &CANONICAL }
    }

    /// Denominations in strictly descending order
    pub fn as_slice(&self) -> &'static [Denomination] {
        self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = Denomination> + 'static {
        self.values.iter().copied()
    }
}

impl Default for DenominationSet {
    fn default() -> Self {
        Self::canonical()
    }
}
