#![allow(dead_code)]

use chrono::NaiveDate;
use projection_core::{
    domain::{Goal, GoalCategory, IncomeSource, RecurringExpense},
    storage::Scenario,
};

pub const EPSILON: f64 = 1e-6;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Every projection in the suite treats October 2026 as the current month.
pub fn origin() -> NaiveDate {
    date(2026, 10, 1)
}

pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < EPSILON
}

/// Scenario whose monthly surplus is exactly `surplus`.
pub fn scenario_with_surplus(surplus: f64, goals: Vec<Goal>) -> Scenario {
    Scenario {
        goals,
        income_sources: vec![IncomeSource::fixed("Salary", surplus + 2_000.0)],
        recurring_expenses: vec![RecurringExpense::new("Rent", 2_000.0)],
        ..Scenario::default()
    }
}

/// A mixed household used by the property checks.
pub fn household_goals() -> Vec<Goal> {
    vec![
        Goal::new("Emergency fund", GoalCategory::Emergency, 3_000.0, date(2027, 3, 1))
            .with_current_amount(500.0)
            .with_urgency(5),
        Goal::new("Japan trip", GoalCategory::Vacation, 4_000.0, date(2027, 9, 1))
            .with_urgency(2)
            .with_start_date(date(2026, 12, 10)),
        Goal::new("Card payoff", GoalCategory::Debt, 1_500.0, date(2026, 8, 1))
            .with_start_date(date(2026, 1, 1))
            .with_urgency(4),
        Goal::new("Index fund", GoalCategory::Investment, 20_000.0, date(2030, 1, 1))
            .with_current_amount(2_500.0)
            .with_interest_rate(7.0)
            .with_urgency(1),
        Goal::new("New car", GoalCategory::Car, 8_000.0, date(2028, 6, 1))
            .with_start_date(date(2027, 5, 1))
            .with_urgency(3),
    ]
}
