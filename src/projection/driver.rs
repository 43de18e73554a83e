//! Forward month-by-month simulation over every goal at once.

use tracing::{debug, info};

use crate::domain::month::MonthIndex;

use super::{
    state::GoalSimulationState,
    summarizer::{IncomeSummary, MonthlyFinancials},
    weighting::{distribute, weigh},
};

/// Everything the snapshot generator needs from a finished simulation.
#[derive(Debug, Clone)]
pub struct SimulationOutcome<'a> {
    pub states: Vec<GoalSimulationState<'a>>,
    /// Indexed by month.
    pub financials: Vec<MonthlyFinancials>,
    /// Indexed by month.
    pub allocated: Vec<f64>,
}

impl SimulationOutcome<'_> {
    pub fn horizon(&self) -> usize {
        self.financials.len()
    }

    pub fn financials_at(&self, month: MonthIndex) -> Option<&MonthlyFinancials> {
        usize::try_from(month)
            .ok()
            .and_then(|idx| self.financials.get(idx))
    }

    pub fn allocated_at(&self, month: MonthIndex) -> f64 {
        usize::try_from(month)
            .ok()
            .and_then(|idx| self.allocated.get(idx).copied())
            .unwrap_or(0.0)
    }
}

/// Runs months `0..horizon` over `states`.
///
/// Each month: compute the surplus, weigh the eligible goals, split the
/// surplus, grow and fund each eligible goal, then flag goals that crossed
/// their target. Months without eligible goals leave their surplus unused.
pub fn simulate<'a>(
    mut states: Vec<GoalSimulationState<'a>>,
    summary: &IncomeSummary,
    horizon: usize,
) -> SimulationOutcome<'a> {
    let mut financials = Vec::with_capacity(horizon);
    let mut allocated = Vec::with_capacity(horizon);

    let last = MonthIndex::try_from(horizon).unwrap_or(MonthIndex::MAX);
    for month in 0..last {
        let month_financials = summary.financials_for(month);
        let total = step_month(&mut states, month, month_financials.surplus);
        for state in states.iter_mut() {
            state.close_month(month);
        }
        financials.push(month_financials);
        allocated.push(total);
    }

    SimulationOutcome {
        states,
        financials,
        allocated,
    }
}

fn step_month(states: &mut [GoalSimulationState<'_>], month: MonthIndex, surplus: f64) -> f64 {
    let eligible: Vec<usize> = states
        .iter()
        .enumerate()
        .filter(|(_, state)| state.is_eligible(month))
        .map(|(idx, _)| idx)
        .collect();
    if eligible.is_empty() {
        debug!(month, surplus, "no eligible goals; surplus left unallocated");
        return 0.0;
    }

    let weights: Vec<f64> = eligible
        .iter()
        .map(|&idx| weigh(&states[idx], month).weight)
        .collect();
    let shares = distribute(surplus, &weights);
    if shares.iter().all(|share| *share == 0.0) && surplus > 0.0 {
        debug!(month, surplus, "all eligible goals funded; surplus left unallocated");
    }

    let mut total = 0.0;
    for (&idx, &share) in eligible.iter().zip(shares.iter()) {
        let state = &mut states[idx];
        if month == state.start_month() {
            debug!(goal = %state.goal().title, month, "goal becomes active");
        }
        state.apply(month, share);
        total += share;
        if state.has_reached_target() {
            state.mark_completed(month);
            info!(
                goal = %state.goal().title,
                month,
                balance = state.balance(),
                "goal reaches its target"
            );
        }
    }

    debug!(
        month,
        surplus,
        eligible = eligible.len(),
        allocated = total,
        "simulated month"
    );
    total
}
