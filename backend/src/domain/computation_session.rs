//! The change calculator session.
//!
//! A [`ComputationSession`] owns the current breakdown and the history
//! ledger. The presentation layer holds a session, calls [`submit`] and
//! [`reset`] in response to user actions, and subscribes a
//! [`SessionObserver`] to be told about results instead of computing them
//! itself.
//!
//! Every call runs to completion before the next one starts; the session is
//! single-threaded and needs no locking.
//!
//! [`submit`]: ComputationSession::submit
//! [`reset`]: ComputationSession::reset

use chrono::Utc;
use shared::ChangeCalculatorConfig;
use tracing::{info, warn};

use super::breakdown_engine::DenominationBreakdownEngine;
use super::history_ledger::HistoryLedger;
use super::input_normalizer::{InputNormalizer, ValidationFailure};
use super::models::{Breakdown, HistoryRecord, MonetaryAmount};

/// Hooks the presentation layer implements to follow session output.
/// All methods default to doing nothing.
pub trait SessionObserver {
    /// A submission succeeded and `breakdown` is now current
    fn on_breakdown(&mut self, _amount: MonetaryAmount, _breakdown: &Breakdown) {}

    /// A submission was rejected; session state is unchanged
    fn on_rejected(&mut self, _failure: &ValidationFailure) {}

    /// The session was reset. The input collaborator must clear its raw
    /// amount text.
    fn on_reset(&mut self) {}
}

/// Whether the session currently holds a computed breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Computed,
}

pub struct ComputationSession {
    normalizer: InputNormalizer,
    engine: DenominationBreakdownEngine,
    ledger: HistoryLedger,
    current: Option<Breakdown>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl ComputationSession {
    pub fn new() -> Self {
        Self::with_config(&ChangeCalculatorConfig::default())
    }

    pub fn with_config(config: &ChangeCalculatorConfig) -> Self {
        Self {
            normalizer: InputNormalizer::with_config(config),
            engine: DenominationBreakdownEngine::new(),
            ledger: HistoryLedger::new(),
            current: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified of submissions and resets
    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Normalize `raw`, compute its breakdown and record it in the history.
    ///
    /// On a validation failure nothing is recorded and the current
    /// breakdown is left as it was.
    pub fn submit(&mut self, raw: &str) -> Result<Breakdown, ValidationFailure> {
        self.submit_with_amount(raw).map(|(_, breakdown)| breakdown)
    }

    /// Same as [`submit`](Self::submit), but also returns the normalized
    /// amount the breakdown was computed for
    pub fn submit_with_amount(
        &mut self,
        raw: &str,
    ) -> Result<(MonetaryAmount, Breakdown), ValidationFailure> {
        let amount = match self.normalizer.normalize(raw) {
            Ok(amount) => amount,
            Err(failure) => {
                warn!("Submission rejected: {}", failure);
                for observer in &mut self.observers {
                    observer.on_rejected(&failure);
                }
                return Err(failure);
            }
        };

        let breakdown = self.engine.compute(amount);
        info!(
            "Computed change for {}: {} entries, {} pieces",
            amount,
            breakdown.len(),
            breakdown.piece_count()
        );

        self.ledger
            .append(HistoryRecord::new(amount, breakdown.clone(), Utc::now()));
        self.current = Some(breakdown.clone());

        for observer in &mut self.observers {
            observer.on_breakdown(amount, &breakdown);
        }

        Ok((amount, breakdown))
    }

    /// Clear the current breakdown and the whole history, and ask observers
    /// to clear their input
    pub fn reset(&mut self) {
        info!("Resetting session");
        self.current = None;
        self.ledger.clear();
        for observer in &mut self.observers {
            observer.on_reset();
        }
    }

    /// Past computations, oldest first
    pub fn history(&self) -> &[HistoryRecord] {
        self.ledger.all()
    }

    /// The last successful breakdown, if any
    pub fn current_breakdown(&self) -> Option<&Breakdown> {
        self.current.as_ref()
    }

    pub fn state(&self) -> SessionState {
        match self.current {
            Some(_) => SessionState::Computed,
            None => SessionState::Idle,
        }
    }
}

impl Default for ComputationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Breakdown(u64, Vec<(u32, u64)>),
        Rejected(ValidationFailure),
        Reset,
    }

    struct RecordingObserver {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl SessionObserver for RecordingObserver {
        fn on_breakdown(&mut self, amount: MonetaryAmount, breakdown: &Breakdown) {
            self.events
                .borrow_mut()
                .push(Event::Breakdown(amount.units(), breakdown.as_pairs()));
        }

        fn on_rejected(&mut self, failure: &ValidationFailure) {
            self.events.borrow_mut().push(Event::Rejected(failure.clone()));
        }

        fn on_reset(&mut self) {
            self.events.borrow_mut().push(Event::Reset);
        }
    }

    fn observed_session() -> (ComputationSession, Rc<RefCell<Vec<Event>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut session = ComputationSession::new();
        session.subscribe(Box::new(RecordingObserver {
            events: Rc::clone(&events),
        }));
        (session, events)
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = ComputationSession::new();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.current_breakdown().is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_submit_records_history_in_order() {
        let mut session = ComputationSession::new();

        let first = session.submit("100").unwrap();
        let second = session.submit("50").unwrap();

        assert_eq!(first.as_pairs(), vec![(100, 1)]);
        assert_eq!(second.as_pairs(), vec![(50, 1)]);

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].input_amount(), MonetaryAmount::new(100));
        assert_eq!(history[0].breakdown(), &first);
        assert_eq!(history[1].input_amount(), MonetaryAmount::new(50));
        assert_eq!(history[1].breakdown(), &second);
        assert!(history[0].recorded_at() <= history[1].recorded_at());
    }

    #[test]
    fn test_submit_sets_current() {
        let mut session = ComputationSession::new();
        let breakdown = session.submit("1999").unwrap();

        assert_eq!(session.state(), SessionState::Computed);
        assert_eq!(session.current_breakdown(), Some(&breakdown));
    }

    #[test]
    fn test_reset_then_zero() {
        let mut session = ComputationSession::new();
        session.submit("100").unwrap();
        session.submit("50").unwrap();

        session.reset();
        assert!(session.history().is_empty());
        assert_eq!(session.state(), SessionState::Idle);

        let breakdown = session.submit("0").unwrap();
        assert!(breakdown.is_empty());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.state(), SessionState::Computed);
    }

    #[test]
    fn test_blank_submission_is_empty_breakdown() {
        let mut session = ComputationSession::new();
        let breakdown = session.submit("").unwrap();

        assert!(breakdown.is_empty());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].input_amount(), MonetaryAmount::ZERO);
    }

    #[test]
    fn test_failures_leave_state_unchanged() {
        let mut session = ComputationSession::new();
        let current = session.submit("7").unwrap();

        assert!(matches!(session.submit("-5"), Err(ValidationFailure::Negative(_))));
        assert!(matches!(session.submit("abc"), Err(ValidationFailure::NotANumber(_))));

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current_breakdown(), Some(&current));
        assert_eq!(session.state(), SessionState::Computed);
    }

    #[test]
    fn test_failure_while_idle_stays_idle() {
        let mut session = ComputationSession::new();
        assert!(session.submit("abc").is_err());
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_fractional_submission_truncates() {
        let mut session = ComputationSession::new();
        let breakdown = session.submit("12.75").unwrap();

        assert_eq!(breakdown.as_pairs(), vec![(10, 1), (2, 1)]);
        assert_eq!(session.history()[0].input_amount(), MonetaryAmount::new(12));
    }

    #[test]
    fn test_submit_with_amount_returns_normalized_amount() {
        let mut session = ComputationSession::new();

        let (amount, breakdown) = session.submit_with_amount(" 12.9 ৳").unwrap();

        assert_eq!(amount, MonetaryAmount::new(12));
        assert_eq!(breakdown.as_pairs(), vec![(10, 1), (2, 1)]);
        assert_eq!(session.history()[0].input_amount(), amount);
        assert!(session.submit_with_amount("-1").is_err());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_observer_notifications() {
        let (mut session, events) = observed_session();

        session.submit("7").unwrap();
        session.submit("abc").unwrap_err();
        session.reset();

        assert_eq!(
            *events.borrow(),
            vec![
                Event::Breakdown(7, vec![(5, 1), (2, 1)]),
                Event::Rejected(ValidationFailure::NotANumber("abc".to_string())),
                Event::Reset,
            ]
        );
    }

    #[test]
    fn test_reset_notifies_every_observer() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut session = ComputationSession::new();
        for _ in 0..2 {
            session.subscribe(Box::new(RecordingObserver {
                events: Rc::clone(&events),
            }));
        }

        session.reset();
        assert_eq!(*events.borrow(), vec![Event::Reset, Event::Reset]);
    }
}
