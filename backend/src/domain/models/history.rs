use chrono::{DateTime, Utc};
use serde::Serialize;

use super::amount::MonetaryAmount;
use super::breakdown::Breakdown;

/// Snapshot of one completed computation. Serialize-only: records are
/// created by the session, never read back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRecord {
    input_amount: MonetaryAmount,
    breakdown: Breakdown,
    recorded_at: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn new(
        input_amount: MonetaryAmount,
        breakdown: Breakdown,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            input_amount,
            breakdown,
            recorded_at,
        }
    }

    pub fn input_amount(&self) -> MonetaryAmount {
        self.input_amount
    }

    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
