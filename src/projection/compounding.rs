//! Monthly compounding for investment goals.

use crate::domain::Goal;

/// Converts an annual percentage into the equivalent monthly compound rate.
///
/// Absent or non-positive rates yield `0`.
pub fn monthly_growth_rate(annual_percent: Option<f64>) -> f64 {
    match annual_percent {
        Some(rate) if rate > 0.0 => (1.0 + rate / 100.0).powf(1.0 / 12.0) - 1.0,
        _ => 0.0,
    }
}

/// Monthly rate applied to `goal`; only investment goals compound.
pub fn goal_growth_rate(goal: &Goal) -> f64 {
    if goal.category.compounds() {
        monthly_growth_rate(goal.interest_rate)
    } else {
        0.0
    }
}

/// Grows the prior balance, then lands this month's contribution.
pub fn apply_month(balance: f64, monthly_rate: f64, allocation: f64) -> f64 {
    balance * (1.0 + monthly_rate) + allocation
}
