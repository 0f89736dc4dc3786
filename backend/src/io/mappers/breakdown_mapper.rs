use shared::{ChangeCalculatorConfig, FormattedBreakdownEntry, SubmitAmountResponse};

use crate::domain::models::{Breakdown, BreakdownEntry, MonetaryAmount};

pub struct BreakdownMapper;

impl BreakdownMapper {
    /// Convert a domain breakdown entry to a display line such as "2 x 200 ৳"
    pub fn entry_to_dto(
        entry: &BreakdownEntry,
        config: &ChangeCalculatorConfig,
    ) -> FormattedBreakdownEntry {
        FormattedBreakdownEntry {
            denomination: entry.denomination.value(),
            count: entry.count,
            formatted: format!(
                "{} x {}",
                entry.count,
                config.format_amount(u64::from(entry.denomination.value()))
            ),
        }
    }

    pub fn entries_to_dto(
        breakdown: &Breakdown,
        config: &ChangeCalculatorConfig,
    ) -> Vec<FormattedBreakdownEntry> {
        breakdown
            .entries()
            .iter()
            .map(|entry| Self::entry_to_dto(entry, config))
            .collect()
    }

    pub fn to_submit_response(
        amount: MonetaryAmount,
        breakdown: &Breakdown,
        config: &ChangeCalculatorConfig,
    ) -> SubmitAmountResponse {
        SubmitAmountResponse {
            amount: amount.units(),
            entries: Self::entries_to_dto(breakdown, config),
            piece_count: breakdown.piece_count(),
            formatted_amount: config.format_amount(amount.units()),
        }
    }
}
