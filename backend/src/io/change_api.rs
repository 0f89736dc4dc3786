//! # Change Calculator API
//!
//! Entry points the presentation layer calls. Each one drives the
//! [`ComputationSession`] and maps the result to `shared` DTOs; validation
//! failures come back as user-facing messages.

use shared::{
    ChangeCalculatorConfig, HistoryResponse, ResetResponse, SubmitAmountRequest,
    SubmitAmountResponse,
};
use tracing::info;

use super::mappers::breakdown_mapper::BreakdownMapper;
use super::mappers::history_mapper::HistoryMapper;
use crate::domain::{ComputationSession, SessionObserver, ValidationFailure};

pub struct ChangeCalculatorApi {
    session: ComputationSession,
    config: ChangeCalculatorConfig,
}

impl ChangeCalculatorApi {
    pub fn new() -> Self {
        Self::with_config(ChangeCalculatorConfig::default())
    }

    pub fn with_config(config: ChangeCalculatorConfig) -> Self {
        Self {
            session: ComputationSession::with_config(&config),
            config,
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.session.subscribe(observer);
    }

    /// Compute change for the entered amount
    pub fn submit_amount(
        &mut self,
        request: SubmitAmountRequest,
    ) -> Result<SubmitAmountResponse, String> {
        info!("submit_amount - request: {:?}", request);

        match self.session.submit_with_amount(&request.amount_input) {
            Ok((amount, breakdown)) => Ok(BreakdownMapper::to_submit_response(
                amount,
                &breakdown,
                &self.config,
            )),
            Err(failure) => {
                info!("submit_amount rejected: {}", failure);
                Err(self.get_error_message(&failure))
            }
        }
    }

    /// Past computations, oldest first
    pub fn get_history(&self) -> HistoryResponse {
        HistoryMapper::to_history_response(self.session.history(), &self.config)
    }

    /// Clear the current breakdown and history. The caller must also clear
    /// its amount field when `clear_input` is set.
    pub fn reset(&mut self) -> ResetResponse {
        self.session.reset();
        ResetResponse {
            success_message: self.config.reset_message.clone(),
            clear_input: true,
        }
    }

    /// User-friendly message for a validation failure
    pub fn get_error_message(&self, failure: &ValidationFailure) -> String {
        match failure {
            ValidationFailure::NotANumber(input) => {
                format!("\"{}\" is not a valid amount. Enter a number like 1500", input)
            }
            ValidationFailure::Negative(_) => "Amount cannot be negative".to_string(),
        }
    }

    pub fn session(&self) -> &ComputationSession {
        &self.session
    }

    pub fn config(&self) -> &ChangeCalculatorConfig {
        &self.config
    }
}

impl Default for ChangeCalculatorApi {
    fn default() -> Self {
        Self::new()
    }
}
