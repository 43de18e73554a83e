//! Input records consumed by the projection engine and the month timeline
//! they are placed on.

pub mod cashflow;
pub mod common;
pub mod goal;
pub mod month;

pub use cashflow::{IncomeSource, OneTimeTransaction, RecurringExpense, SideIncome, TransactionKind};
pub use common::RecordStatus;
pub use goal::{Goal, GoalCategory, GoalStatus};
pub use month::MonthIndex;

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use uuid;
