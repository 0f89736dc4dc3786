use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::amount::MonetaryAmount;
use super::denomination::Denomination;

/// How many of one denomination are handed out. `count` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub denomination: Denomination,
    pub count: u64,
}

impl BreakdownEntry {
    /// Value covered by this entry
    pub fn subtotal(&self) -> u64 {
        u64::from(self.denomination.value()) * self.count
    }
}

/// Why a list of entries is not a valid breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidBreakdown {
    #[error("entry for {0} has a zero count")]
    ZeroCount(Denomination),
    #[error("entry for {0} is out of descending order")]
    NotDescending(Denomination),
    #[error("breakdown total does not fit in whole units")]
    TotalOverflow,
}

/// Ordered change for one amount, largest denomination first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BreakdownEntry>", into = "Vec<BreakdownEntry>")]
pub struct Breakdown {
    entries: Vec<BreakdownEntry>,
}

impl TryFrom<Vec<BreakdownEntry>> for Breakdown {
    type Error = InvalidBreakdown;

    fn try_from(entries: Vec<BreakdownEntry>) -> Result<Self, Self::Error> {
        let mut total: u64 = 0;
        let mut previous: Option<Denomination> = None;

        for entry in &entries {
            if entry.count == 0 {
                return Err(InvalidBreakdown::ZeroCount(entry.denomination));
            }
            if previous.is_some_and(|p| p <= entry.denomination) {
                return Err(InvalidBreakdown::NotDescending(entry.denomination));
            }
            total = u64::from(entry.denomination.value())
                .checked_mul(entry.count)
                .and_then(|subtotal| total.checked_add(subtotal))
                .ok_or(InvalidBreakdown::TotalOverflow)?;
            previous = Some(entry.denomination);
        }

        Ok(Self { entries })
    }
}

impl From<Breakdown> for Vec<BreakdownEntry> {
    fn from(breakdown: Breakdown) -> Self {
        breakdown.entries
    }
}

impl Breakdown {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append an entry. Zero counts are dropped and entries must arrive in
    /// strictly descending denomination order.
    pub(crate) fn push(&mut self, denomination: Denomination, count: u64) {
        if count == 0 {
            return;
        }
        debug_assert!(
            self.entries.last().map_or(true, |last| last.denomination > denomination),
            "breakdown entries must be strictly descending"
        );
        self.entries.push(BreakdownEntry { denomination, count });
    }

    pub fn entries(&self) -> &[BreakdownEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of denomination x count over all entries
    pub fn total(&self) -> MonetaryAmount {
        MonetaryAmount::new(self.entries.iter().map(BreakdownEntry::subtotal).sum())
    }

    /// Number of notes and coins in the breakdown
    pub fn piece_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// `(denomination, count)` pairs as plain integers
    pub fn as_pairs(&self) -> Vec<(u32, u64)> {
        self.entries
            .iter()
            .map(|e| (e.denomination.value(), e.count))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Breakdown {
    type Item = &'a BreakdownEntry;
    type IntoIter = std::slice::Iter<'a, BreakdownEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
