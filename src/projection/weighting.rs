//! Priority weighting that splits a month's surplus across eligible goals.
//!
//! Each goal's weight is the monthly amount it needs to finish on time,
//! scaled by its urgency and by how close its deadline is:
//!
//! ```text
//! remaining           = max(0, target - balance)
//! months_left         = max(1, deadline_month - month)
//! monthly_requirement = remaining / months_left
//! time_pressure       = max(0.1, 12 / months_left)
//! weight              = monthly_requirement * urgency * time_pressure
//! ```
//!
//! Weights depend on balances, which depend on earlier allocations, so this
//! has to be evaluated one month at a time in simulation order.

use crate::domain::month::MonthIndex;

use super::state::GoalSimulationState;

pub const MIN_MONTHS_UNTIL_DEADLINE: MonthIndex = 1;
pub const MIN_TIME_PRESSURE: f64 = 0.1;
const PRESSURE_REFERENCE_MONTHS: f64 = 12.0;

/// Breakdown of one goal's weight in one month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalWeight {
    pub remaining: f64,
    pub months_until_deadline: MonthIndex,
    pub monthly_requirement: f64,
    pub time_pressure: f64,
    pub weight: f64,
}

/// Months left before the deadline, floored at one so overdue goals keep a
/// finite, positive divisor.
pub fn months_until_deadline(deadline_month: MonthIndex, month: MonthIndex) -> MonthIndex {
    (deadline_month - month).max(MIN_MONTHS_UNTIL_DEADLINE)
}

pub fn time_pressure(months_until_deadline: MonthIndex) -> f64 {
    (PRESSURE_REFERENCE_MONTHS / months_until_deadline as f64).max(MIN_TIME_PRESSURE)
}

pub fn goal_weight(
    target_amount: f64,
    balance: f64,
    urgency_score: u8,
    deadline_month: MonthIndex,
    month: MonthIndex,
) -> GoalWeight {
    let remaining = (target_amount - balance).max(0.0);
    let months_until_deadline = months_until_deadline(deadline_month, month);
    let monthly_requirement = remaining / months_until_deadline as f64;
    let time_pressure = time_pressure(months_until_deadline);
    GoalWeight {
        remaining,
        months_until_deadline,
        monthly_requirement,
        time_pressure,
        weight: monthly_requirement * f64::from(urgency_score) * time_pressure,
    }
}

/// Weight of a simulated goal at the start of `month`.
pub fn weigh(state: &GoalSimulationState<'_>, month: MonthIndex) -> GoalWeight {
    let goal = state.goal();
    goal_weight(
        goal.target_amount,
        state.balance(),
        goal.urgency_score,
        state.deadline_month(),
        month,
    )
}

/// Splits `surplus` proportionally to `weights`.
///
/// A zero total weight allocates nothing to anyone; the surplus simply stays
/// unallocated.
pub fn distribute(surplus: f64, weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return vec![0.0; weights.len()];
    }
    weights
        .iter()
        .map(|weight| surplus * (weight / total))
        .collect()
}
