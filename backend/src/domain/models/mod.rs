//! Value types shared by the change calculator services.

pub mod amount;
pub mod breakdown;
pub mod denomination;
pub mod history;

pub use amount::MonetaryAmount;
pub use breakdown::{Breakdown, BreakdownEntry, InvalidBreakdown};
pub use denomination::{Denomination, DenominationSet, InvalidDenomination};
pub use history::HistoryRecord;
