//! Gathers projection inputs from a data collaborator and runs the engine.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::{
    domain::{
        month::{month_id, month_start},
        Goal, IncomeSource, OneTimeTransaction, RecurringExpense, SideIncome,
    },
    errors::{ProjectionError, Result},
    projection::{
        summarizer::summarize, CashflowInputs, IncomeSummary, ProjectionEngine, ProjectionInputs,
        ProjectionReport, ProjectionRequest,
    },
};

use super::clock::Clock;

/// Read-only contract for the collaborator that owns the user's records.
///
/// Implementations return already-validated, status-filtered collections.
pub trait FinanceSource {
    fn active_goals(&self) -> Result<Vec<Goal>>;
    fn active_recurring_expenses(&self) -> Result<Vec<RecurringExpense>>;
    fn active_income_sources(&self) -> Result<Vec<IncomeSource>>;
    fn active_side_incomes(&self) -> Result<Vec<SideIncome>>;
    /// One-time transactions dated within the month starting at `month`.
    fn one_time_transactions(&self, month: NaiveDate) -> Result<Vec<OneTimeTransaction>>;
}

/// Owned copy of every collection a projection reads.
#[derive(Debug, Clone, Default)]
pub struct GatheredInputs {
    pub goals: Vec<Goal>,
    pub recurring_expenses: Vec<RecurringExpense>,
    pub income_sources: Vec<IncomeSource>,
    pub side_incomes: Vec<SideIncome>,
    pub one_time_transactions: Vec<OneTimeTransaction>,
}

impl GatheredInputs {
    pub fn as_inputs(&self) -> ProjectionInputs<'_> {
        ProjectionInputs {
            goals: &self.goals,
            income_sources: &self.income_sources,
            side_incomes: &self.side_incomes,
            recurring_expenses: &self.recurring_expenses,
            one_time_transactions: &self.one_time_transactions,
        }
    }
}

pub struct ProjectionService;

impl ProjectionService {
    /// Projects the requested window starting from the clock's current month.
    ///
    /// Any collaborator failure aborts the whole request.
    pub fn project(
        source: &dyn FinanceSource,
        clock: &dyn Clock,
        request: ProjectionRequest,
    ) -> Result<ProjectionReport> {
        request.validate()?;
        let current_month = month_start(clock.today());
        info!(
            month = %month_id(current_month),
            start_offset = request.start_offset,
            window_months = request.window_months,
            horizon = request.horizon(),
            "running goal projection"
        );
        let gathered = Self::gather(source, current_month)?;
        Ok(ProjectionEngine::project(
            &gathered.as_inputs(),
            request,
            current_month,
        ))
    }

    /// Summarizes the current month's income and obligations.
    pub fn summarize(source: &dyn FinanceSource, clock: &dyn Clock) -> Result<IncomeSummary> {
        let current_month = month_start(clock.today());
        let gathered = Self::gather(source, current_month)?;
        Ok(summarize(
            &CashflowInputs {
                income_sources: &gathered.income_sources,
                side_incomes: &gathered.side_incomes,
                recurring_expenses: &gathered.recurring_expenses,
                one_time_transactions: &gathered.one_time_transactions,
            },
            current_month,
        ))
    }

    pub fn gather(source: &dyn FinanceSource, current_month: NaiveDate) -> Result<GatheredInputs> {
        let gathered = GatheredInputs {
            goals: source.active_goals().map_err(abort)?,
            recurring_expenses: source.active_recurring_expenses().map_err(abort)?,
            income_sources: source.active_income_sources().map_err(abort)?,
            side_incomes: source.active_side_incomes().map_err(abort)?,
            one_time_transactions: source
                .one_time_transactions(current_month)
                .map_err(abort)?,
        };
        Ok(gathered)
    }
}

fn abort(err: ProjectionError) -> ProjectionError {
    warn!(error = %err, "failed to gather projection inputs");
    match err {
        ProjectionError::Source(_) => err,
        other => ProjectionError::Source(other.to_string()),
    }
}
