//! # Domain Module
//!
//! Business logic for the change calculator. Nothing here knows about the
//! UI; the presentation layer drives a [`ComputationSession`] and renders
//! what it returns.
//!
//! ## Module Organization
//!
//! - **models**: denominations, amounts, breakdowns and history records
//! - **input_normalizer**: turns raw amount text into a validated amount
//! - **breakdown_engine**: greedy change computation over the canonical set
//! - **history_ledger**: chronological log of past computations
//! - **computation_session**: normalize, compute, record; plus reset
//!
//! ## Business Rules
//!
//! - Amounts are whole units; fractional input is truncated
//! - Blank input means zero and yields an empty breakdown
//! - Negative or non-numeric input is rejected and never recorded
//! - Breakdowns list only denominations actually used, largest first
//! - Reset clears both the current breakdown and the history

pub mod breakdown_engine;
pub mod computation_session;
pub mod history_ledger;
pub mod input_normalizer;
pub mod models;

pub use breakdown_engine::*;
pub use computation_session::*;
pub use history_ledger::*;
pub use input_normalizer::*;
