//! # Coin Change Backend
//!
//! All non-UI logic for the coin change calculator.
//!
//! - **Domain**: amount normalization, greedy breakdown, history ledger and
//!   the session that ties them together
//! - **IO**: the API the presentation layer calls, returning `shared` DTOs
//! - **Logging**: tracing subscriber setup
//!
//! ```text
//! UI (text entry, buttons, history overlay)
//!     ↓
//! IO Layer (ChangeCalculatorApi, mappers)
//!     ↓
//! Domain Layer (ComputationSession and its services)
//! ```
//!
//! Everything is in memory; history is lost when the process exits.

pub mod domain;
pub mod io;
pub mod logging;

use anyhow::Result;
use shared::ChangeCalculatorConfig;
use tracing::info;

pub use domain::*;
pub use io::*;

/// Set up logging and build the API for the given configuration
pub fn initialize_backend(config: ChangeCalculatorConfig) -> Result<ChangeCalculatorApi> {
    logging::init_logging(&config)?;

    info!("Setting up change calculator");
    Ok(ChangeCalculatorApi::with_config(config))
}
