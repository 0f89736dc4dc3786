use serde::{Deserialize, Serialize};

/// A single line of a change breakdown, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedBreakdownEntry {
    pub denomination: u32,
    pub count: u64,
    /// Display text, e.g. "2 x 200 ৳"
    pub formatted: String,
}

/// Request to compute change for a raw amount typed by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitAmountRequest {
    /// Raw text from the amount input, exactly as entered
    pub amount_input: String,
}

/// Response after a successful change computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitAmountResponse {
    /// Whole-unit amount the breakdown was computed for
    pub amount: u64,
    pub entries: Vec<FormattedBreakdownEntry>,
    /// Total number of notes and coins handed out
    pub piece_count: u64,
    pub formatted_amount: String,
}

/// A past computation as shown in the history overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecordView {
    pub amount: u64,
    pub formatted_amount: String,
    pub entries: Vec<FormattedBreakdownEntry>,
    /// RFC 3339 timestamp of when the computation completed
    pub recorded_at: String,
}

/// Response containing the computation history, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub records: Vec<HistoryRecordView>,
}

/// Response after resetting the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetResponse {
    pub success_message: String,
    /// The input widget should drop whatever text it currently holds
    pub clear_input: bool,
}

/// Configuration for the change calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeCalculatorConfig {
    /// Suffix rendered after every amount
    pub currency_symbol: String,
    pub enable_debug_logging: bool,
    pub reset_message: String,
}

impl Default for ChangeCalculatorConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "৳".to_string(),
            enable_debug_logging: false,
            reset_message: "Calculator cleared".to_string(),
        }
    }
}

impl ChangeCalculatorConfig {
    /// Format an amount with the configured currency suffix
    pub fn format_amount(&self, amount: u64) -> String {
        format!("{} {}", amount, self.currency_symbol)
    }
}
