//! In-memory log of completed computations.

use tracing::info;

use super::models::HistoryRecord;

/// Chronological, append-only list of past computations.
///
/// Records are kept in insertion order with no deduplication or size cap
/// until [`HistoryLedger::clear`] is called.
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    records: Vec<HistoryRecord>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    /// All records, oldest first
    pub fn all(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        info!("Clearing {} history records", self.records.len());
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::breakdown_engine::DenominationBreakdownEngine;
    use crate::domain::models::MonetaryAmount;
    use chrono::Utc;

    fn record(amount: u64) -> HistoryRecord {
        let amount = MonetaryAmount::new(amount);
        let breakdown = DenominationBreakdownEngine::new().compute(amount);
        HistoryRecord::new(amount, breakdown, Utc::now())
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut ledger = HistoryLedger::new();
        ledger.append(record(100));
        ledger.append(record(7));
        ledger.append(record(100));

        let amounts: Vec<u64> = ledger.all().iter().map(|r| r.input_amount().units()).collect();
        assert_eq!(amounts, vec![100, 7, 100]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_records_keep_their_own_breakdown() {
        let mut ledger = HistoryLedger::new();
        ledger.append(record(100));
        ledger.append(record(50));

        assert_eq!(ledger.all()[0].breakdown().as_pairs(), vec![(100, 1)]);
        assert_eq!(ledger.all()[1].breakdown().as_pairs(), vec![(50, 1)]);
    }

    #[test]
    fn test_clear_empties_ledger() {
        let mut ledger = HistoryLedger::new();
        ledger.append(record(1));
        ledger.append(record(2));
        ledger.clear();

        assert!(ledger.is_empty());
        assert!(ledger.all().is_empty());

        ledger.append(record(3));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_clear_on_empty_ledger() {
        let mut ledger = HistoryLedger::new();
        ledger.clear();
        assert!(ledger.is_empty());
    }
}
