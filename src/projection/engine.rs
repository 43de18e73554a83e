use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    config::Config,
    domain::{month::month_start, Goal, IncomeSource, OneTimeTransaction, RecurringExpense, SideIncome},
    errors::{ProjectionError, Result},
};

use super::{
    driver::simulate,
    snapshot::{financial_only, generate, ProjectionReport},
    state::GoalSimulationState,
    summarizer::{summarize, CashflowInputs},
};

pub const DEFAULT_WINDOW_MONTHS: u32 = 12;
pub const MAX_WINDOW_MONTHS: u32 = 24;
/// Furthest month, counted from the current one, a window may start at.
pub const MAX_START_OFFSET: u32 = 120;

/// Which slice of the timeline the caller wants back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub start_offset: u32,
    pub window_months: u32,
}

impl Default for ProjectionRequest {
    fn default() -> Self {
        Self {
            start_offset: 0,
            window_months: DEFAULT_WINDOW_MONTHS,
        }
    }
}

impl ProjectionRequest {
    /// Clamps the window to `1..=MAX_WINDOW_MONTHS`.
    pub fn new(start_offset: u32, window_months: u32) -> Self {
        Self::with_limit(start_offset, window_months, MAX_WINDOW_MONTHS)
    }

    /// Clamps the window to `1..=limit`, where `limit` itself never exceeds
    /// [`MAX_WINDOW_MONTHS`].
    pub fn with_limit(start_offset: u32, window_months: u32, limit: u32) -> Self {
        let limit = limit.clamp(1, MAX_WINDOW_MONTHS);
        Self {
            start_offset,
            window_months: window_months.clamp(1, limit),
        }
    }

    /// Rejects offsets past [`MAX_START_OFFSET`].
    pub fn validate(&self) -> Result<()> {
        if self.start_offset > MAX_START_OFFSET {
            return Err(ProjectionError::InvalidInput(format!(
                "start offset {} exceeds the maximum of {} months",
                self.start_offset, MAX_START_OFFSET
            )));
        }
        Ok(())
    }

    /// Copy with both parameters forced into their supported ranges.
    pub fn bounded(&self) -> Self {
        Self::with_limit(
            self.start_offset.min(MAX_START_OFFSET),
            self.window_months,
            MAX_WINDOW_MONTHS,
        )
    }

    /// Fills unspecified parameters from `config`.
    pub fn from_config(
        config: &Config,
        start_offset: Option<u32>,
        window_months: Option<u32>,
    ) -> Self {
        Self::with_limit(
            start_offset.unwrap_or(0),
            window_months.unwrap_or(config.default_window_months),
            config.max_window_months,
        )
    }

    /// Months simulated internally: everything up to and one past the window.
    pub fn horizon(&self) -> usize {
        (self.start_offset as usize)
            .saturating_add(self.window_months as usize)
            .saturating_add(1)
    }

    pub fn months(&self) -> impl Iterator<Item = u32> {
        self.start_offset..self.start_offset.saturating_add(self.window_months)
    }
}

/// Already-gathered inputs for one projection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionInputs<'a> {
    pub goals: &'a [Goal],
    pub income_sources: &'a [IncomeSource],
    pub side_incomes: &'a [SideIncome],
    pub recurring_expenses: &'a [RecurringExpense],
    pub one_time_transactions: &'a [OneTimeTransaction],
}

impl<'a> ProjectionInputs<'a> {
    fn cashflows(&self) -> CashflowInputs<'a> {
        CashflowInputs {
            income_sources: self.income_sources,
            side_incomes: self.side_incomes,
            recurring_expenses: self.recurring_expenses,
            one_time_transactions: self.one_time_transactions,
        }
    }
}

/// Stateless façade over the summarizer, simulation driver, and snapshot
/// generator. Identical inputs always produce identical reports.
pub struct ProjectionEngine;

impl ProjectionEngine {
    pub fn project(
        inputs: &ProjectionInputs<'_>,
        request: ProjectionRequest,
        current_month: NaiveDate,
    ) -> ProjectionReport {
        let request = request.bounded();
        let origin = month_start(current_month);
        let summary = summarize(&inputs.cashflows(), origin);
        let active: Vec<&Goal> = inputs.goals.iter().filter(|goal| goal.is_active()).collect();

        if active.is_empty() {
            info!(
                months = request.window_months,
                "no active goals; returning financial-only projection"
            );
            return ProjectionReport {
                start_offset: request.start_offset,
                total_active_goals: 0,
                months: financial_only(&summary, origin, request.months()),
            };
        }

        let horizon = request.horizon();
        let states = active
            .iter()
            .map(|&goal| GoalSimulationState::new(goal, origin, horizon))
            .collect();
        let outcome = simulate(states, &summary, horizon);

        ProjectionReport {
            start_offset: request.start_offset,
            total_active_goals: active.len(),
            months: generate(&outcome, origin, request.months()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GoalCategory;

    #[test]
    fn request_defaults_and_clamps() {
        assert_eq!(ProjectionRequest::default().window_months, 12);
        assert_eq!(ProjectionRequest::new(0, 100).window_months, 24);
        assert_eq!(ProjectionRequest::new(0, 0).window_months, 1);
        assert_eq!(ProjectionRequest::with_limit(2, 20, 6).window_months, 6);
        assert_eq!(ProjectionRequest::with_limit(2, 20, 99).window_months, 20);
    }

    #[test]
    fn horizon_includes_lookahead_month() {
        let request = ProjectionRequest::new(3, 3);
        assert_eq!(request.horizon(), 7);
        assert_eq!(request.months().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn from_config_uses_configured_defaults() {
        let config = Config {
            default_window_months: 6,
            max_window_months: 9,
            ..Config::default()
        };
        let request = ProjectionRequest::from_config(&config, None, None);
        assert_eq!(request, ProjectionRequest::new(0, 6));
        let request = ProjectionRequest::from_config(&config, Some(2), Some(18));
        assert_eq!(request.start_offset, 2);
        assert_eq!(request.window_months, 9);
    }

    #[test]
    fn far_offsets_fail_validation() {
        assert!(ProjectionRequest::new(MAX_START_OFFSET, 24).validate().is_ok());
        let err = ProjectionRequest::new(MAX_START_OFFSET + 1, 12)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidInput(_)));
    }

    #[test]
    fn extreme_requests_are_bounded_before_simulating() {
        let request = ProjectionRequest {
            start_offset: u32::MAX - 1,
            window_months: u32::MAX,
        };
        assert_eq!(request.months().count(), 1);
        let bounded = request.bounded();
        assert_eq!(bounded.start_offset, MAX_START_OFFSET);
        assert_eq!(bounded.window_months, MAX_WINDOW_MONTHS);
        assert_eq!(bounded.horizon(), (MAX_START_OFFSET + MAX_WINDOW_MONTHS + 1) as usize);

        let deadline = NaiveDate::from_ymd_opt(2027, 6, 1).unwrap();
        let goals = [Goal::new("Buffer", GoalCategory::Emergency, 500.0, deadline)];
        let income = [IncomeSource::fixed("Salary", 2_100.0)];
        let inputs = ProjectionInputs {
            goals: &goals,
            income_sources: &income,
            ..ProjectionInputs::default()
        };
        let origin = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let report = ProjectionEngine::project(&inputs, request, origin);
        assert_eq!(report.start_offset, MAX_START_OFFSET);
        assert_eq!(report.months.len(), MAX_WINDOW_MONTHS as usize);
    }
}
