use chrono::SecondsFormat;
use shared::{ChangeCalculatorConfig, HistoryRecordView, HistoryResponse};

use super::breakdown_mapper::BreakdownMapper;
use crate::domain::models::HistoryRecord;

pub struct HistoryMapper;

impl HistoryMapper {
    pub fn to_dto(record: &HistoryRecord, config: &ChangeCalculatorConfig) -> HistoryRecordView {
        HistoryRecordView {
            amount: record.input_amount().units(),
            formatted_amount: config.format_amount(record.input_amount().units()),
            entries: BreakdownMapper::entries_to_dto(record.breakdown(), config),
            recorded_at: record.recorded_at().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn to_history_response(
        records: &[HistoryRecord],
        config: &ChangeCalculatorConfig,
    ) -> HistoryResponse {
        HistoryResponse {
            records: records.iter().map(|r| Self::to_dto(r, config)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::MonetaryAmount;
    use crate::domain::DenominationBreakdownEngine;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_to_dto() {
        let config = ChangeCalculatorConfig::default();
        let amount = MonetaryAmount::new(70);
        let record = HistoryRecord::new(
            amount,
            DenominationBreakdownEngine::new().compute(amount),
            Utc.with_ymd_and_hms(2025, 6, 12, 9, 30, 0).unwrap(),
        );

        let view = HistoryMapper::to_dto(&record, &config);

        assert_eq!(view.amount, 70);
        assert_eq!(view.formatted_amount, "70 ৳");
        assert_eq!(view.recorded_at, "2025-06-12T09:30:00.000Z");
        let lines: Vec<&str> = view.entries.iter().map(|e| e.formatted.as_str()).collect();
        assert_eq!(lines, vec!["1 x 50 ৳", "1 x 20 ৳"]);
    }
}
