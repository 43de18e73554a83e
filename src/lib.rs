#![doc(test(attr(deny(warnings))))]

//! Projection Core simulates how a household's monthly surplus is shared
//! across concurrent savings, debt, and investment goals, and reports each
//! goal's projected state month by month.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod projection;
pub mod services;
pub mod storage;
pub mod utils;

pub use errors::{ProjectionError, Result};
pub use projection::{ProjectionEngine, ProjectionInputs, ProjectionReport, ProjectionRequest};
pub use services::{FinanceSource, ProjectionService};

/// Initializes global tracing at the default level.
pub fn init() {
    utils::init_tracing(0);
    tracing::debug!("Projection Core tracing initialized.");
}
