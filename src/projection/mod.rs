//! Multi-goal surplus allocation projection.
//!
//! Pipeline: [`summarizer`] reduces cash flows to monthly totals, [`state`]
//! builds one record per active goal, [`driver`] advances every record month
//! by month using [`weighting`] and [`compounding`], and [`snapshot`] turns
//! the finished simulation into the caller-visible report.

pub mod compounding;
pub mod driver;
pub mod engine;
pub mod snapshot;
pub mod state;
pub mod summarizer;
pub mod weighting;

pub use engine::{
    ProjectionEngine, ProjectionInputs, ProjectionRequest, DEFAULT_WINDOW_MONTHS,
    MAX_START_OFFSET, MAX_WINDOW_MONTHS,
};
pub use snapshot::{
    ActiveGoal, CompletedGoal, GoalProjectionStatus, MonthSnapshot, ProjectionReport,
    SnapshotFinancials, SnapshotSummary, UpcomingGoal,
};
pub use state::{GoalPhase, GoalSimulationState};
pub use summarizer::{CashflowInputs, IncomeSummary, MonthlyFinancials};
