//! Caller-facing per-month views derived from a finished simulation.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    month::{month_id, month_label, offset_index, shift_month, starts_in_label, MonthIndex},
    GoalCategory,
};

use super::{
    driver::SimulationOutcome,
    state::{GoalPhase, GoalSimulationState},
    summarizer::{IncomeSummary, MonthlyFinancials},
};

/// Full projection response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionReport {
    pub start_offset: u32,
    pub total_active_goals: usize,
    pub months: Vec<MonthSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSnapshot {
    pub month_offset: u32,
    /// `YYYY-MM`
    pub month: String,
    pub label: String,
    pub upcoming_goals: Vec<UpcomingGoal>,
    pub active_goals: Vec<ActiveGoal>,
    pub completed_goals: Vec<CompletedGoal>,
    pub financials: SnapshotFinancials,
    pub summary: SnapshotSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingGoal {
    pub id: Uuid,
    pub title: String,
    pub category: GoalCategory,
    pub target_amount: f64,
    pub current_amount: f64,
    pub start_month: String,
    pub starts_in: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveGoal {
    pub id: Uuid,
    pub title: String,
    pub category: GoalCategory,
    pub target_amount: f64,
    pub urgency_score: u8,
    pub projected_balance: f64,
    pub monthly_allocation: f64,
    pub progress_percent: f64,
    /// Signed; zero or negative once the deadline has passed.
    pub months_until_deadline: MonthIndex,
    pub status: GoalProjectionStatus,
    pub is_starting_this_month: bool,
    pub is_completed_this_month: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedGoal {
    pub id: Uuid,
    pub title: String,
    pub category: GoalCategory,
    pub target_amount: f64,
    pub final_balance: f64,
    pub completed_month: String,
    pub completed_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalProjectionStatus {
    Active,
    AtRisk,
    Completed,
}

impl GoalProjectionStatus {
    pub fn classify(balance: f64, target: f64, months_until_deadline: MonthIndex) -> Self {
        if balance >= target {
            GoalProjectionStatus::Completed
        } else if months_until_deadline <= 0 {
            GoalProjectionStatus::AtRisk
        } else {
            GoalProjectionStatus::Active
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GoalProjectionStatus::Active => "active",
            GoalProjectionStatus::AtRisk => "at risk",
            GoalProjectionStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotFinancials {
    pub income: f64,
    pub base_monthly_income: f64,
    pub side_project_income: f64,
    pub one_time_net: f64,
    pub expenses: f64,
    pub surplus: f64,
    pub savings_rate: f64,
    pub total_allocated_to_goals: f64,
}

impl SnapshotFinancials {
    fn from_month(financials: &MonthlyFinancials, total_allocated_to_goals: f64) -> Self {
        Self {
            income: financials.income(),
            base_monthly_income: financials.base_monthly_income,
            side_project_income: financials.side_project_income,
            one_time_net: financials.one_time_net,
            expenses: financials.monthly_expenses,
            surplus: financials.surplus,
            savings_rate: financials.savings_rate(),
            total_allocated_to_goals,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSummary {
    pub active_count: usize,
    pub completed_count: usize,
    pub upcoming_count: usize,
    pub average_progress: f64,
}

/// Builds one snapshot per month in `months`, reading balances from the
/// simulation's cache.
pub fn generate(
    outcome: &SimulationOutcome<'_>,
    origin: NaiveDate,
    months: impl Iterator<Item = u32>,
) -> Vec<MonthSnapshot> {
    months
        .map(|offset| month_snapshot(outcome, origin, offset))
        .collect()
}

/// Snapshots with empty goal buckets, used when there is nothing to allocate to.
pub fn financial_only(
    summary: &IncomeSummary,
    origin: NaiveDate,
    months: impl Iterator<Item = u32>,
) -> Vec<MonthSnapshot> {
    months
        .map(|offset| {
            let month = offset_index(offset);
            let financials = summary.financials_for(month);
            let date = shift_month(origin, month);
            MonthSnapshot {
                month_offset: offset,
                month: month_id(date),
                label: month_label(date),
                upcoming_goals: Vec::new(),
                active_goals: Vec::new(),
                completed_goals: Vec::new(),
                financials: SnapshotFinancials::from_month(&financials, 0.0),
                summary: SnapshotSummary {
                    active_count: 0,
                    completed_count: 0,
                    upcoming_count: 0,
                    average_progress: 0.0,
                },
            }
        })
        .collect()
}

fn month_snapshot(outcome: &SimulationOutcome<'_>, origin: NaiveDate, offset: u32) -> MonthSnapshot {
    let month = offset_index(offset);
    let date = shift_month(origin, month);
    let mut upcoming_goals = Vec::new();
    let mut active_goals = Vec::new();
    let mut completed_goals = Vec::new();

    for state in &outcome.states {
        match state.phase_in(month) {
            GoalPhase::NotStarted => upcoming_goals.push(upcoming(state, origin, month)),
            GoalPhase::Completed => completed_goals.push(completed(state, origin)),
            GoalPhase::Active => active_goals.push(active(state, month)),
        }
    }

    let total_allocated = outcome.allocated_at(month);
    let financials = outcome
        .financials_at(month)
        .copied()
        .unwrap_or_default();
    let average_progress = if active_goals.is_empty() {
        0.0
    } else {
        active_goals
            .iter()
            .map(|goal| goal.progress_percent)
            .sum::<f64>()
            / active_goals.len() as f64
    };

    MonthSnapshot {
        month_offset: offset,
        month: month_id(date),
        label: month_label(date),
        summary: SnapshotSummary {
            active_count: active_goals.len(),
            completed_count: completed_goals.len(),
            upcoming_count: upcoming_goals.len(),
            average_progress,
        },
        upcoming_goals,
        active_goals,
        completed_goals,
        financials: SnapshotFinancials::from_month(&financials, total_allocated),
    }
}

fn upcoming(state: &GoalSimulationState<'_>, origin: NaiveDate, month: MonthIndex) -> UpcomingGoal {
    let goal = state.goal();
    UpcomingGoal {
        id: goal.id,
        title: goal.title.clone(),
        category: goal.category,
        target_amount: goal.target_amount,
        current_amount: goal.current_amount,
        start_month: month_id(shift_month(origin, state.start_month())),
        starts_in: starts_in_label(state.start_month() - month),
    }
}

fn completed(state: &GoalSimulationState<'_>, origin: NaiveDate) -> CompletedGoal {
    let goal = state.goal();
    let done = state.completion_month().unwrap_or_default();
    let done_date = shift_month(origin, done);
    CompletedGoal {
        id: goal.id,
        title: goal.title.clone(),
        category: goal.category,
        target_amount: goal.target_amount,
        final_balance: state.balance_at(done),
        completed_month: month_id(done_date),
        completed_label: month_label(done_date),
    }
}

fn active(state: &GoalSimulationState<'_>, month: MonthIndex) -> ActiveGoal {
    let goal = state.goal();
    let balance = state.balance_at(month);
    let months_until_deadline = state.deadline_month() - month;
    ActiveGoal {
        id: goal.id,
        title: goal.title.clone(),
        category: goal.category,
        target_amount: goal.target_amount,
        urgency_score: goal.urgency_score,
        projected_balance: balance,
        monthly_allocation: state.allocation_in(month),
        progress_percent: progress_percent(balance, goal.target_amount),
        months_until_deadline,
        status: GoalProjectionStatus::classify(balance, goal.target_amount, months_until_deadline),
        is_starting_this_month: state.start_month() == month,
        is_completed_this_month: state.completion_month() == Some(month),
    }
}

fn progress_percent(balance: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 100.0;
    }
    (balance / target * 100.0).clamp(0.0, 100.0)
}
