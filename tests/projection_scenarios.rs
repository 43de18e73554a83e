mod common;

use common::{approx_eq, date, origin, scenario_with_surplus};
use projection_core::{
    domain::{Goal, GoalCategory, GoalStatus, IncomeSource, RecurringExpense},
    projection::{GoalProjectionStatus, MonthSnapshot, ProjectionReport},
    services::FixedClock,
    storage::Scenario,
    ProjectionRequest, ProjectionService,
};

fn project(scenario: &Scenario, request: ProjectionRequest) -> ProjectionReport {
    ProjectionService::project(scenario, &FixedClock::new(date(2026, 10, 16)), request)
        .expect("projection succeeds")
}

fn active<'a>(month: &'a MonthSnapshot, title: &str) -> &'a projection_core::projection::ActiveGoal {
    month
        .active_goals
        .iter()
        .find(|goal| goal.title == title)
        .unwrap_or_else(|| panic!("{title} is active in {}", month.label))
}

#[test]
fn sole_goal_takes_full_surplus_and_completes_on_schedule() {
    let goal = Goal::new("Laptop", GoalCategory::Other, 1_200.0, date(2027, 4, 1)).with_urgency(3);
    let scenario = scenario_with_surplus(200.0, vec![goal]);
    let report = project(&scenario, ProjectionRequest::new(0, 8));

    assert_eq!(report.months.len(), 8);
    for (offset, month) in report.months.iter().take(6).enumerate() {
        let laptop = active(month, "Laptop");
        assert_eq!(laptop.monthly_allocation, 200.0);
        assert_eq!(laptop.projected_balance, 200.0 * (offset + 1) as f64);
        assert_eq!(month.financials.total_allocated_to_goals, 200.0);
    }

    let sixth = &report.months[5];
    let laptop = active(sixth, "Laptop");
    assert_eq!(laptop.projected_balance, 1_200.0);
    assert_eq!(laptop.status, GoalProjectionStatus::Completed);
    assert!(laptop.is_completed_this_month);
    assert_eq!(laptop.progress_percent, 100.0);

    let seventh = &report.months[6];
    assert!(seventh.active_goals.is_empty());
    assert_eq!(seventh.completed_goals.len(), 1);
    assert_eq!(seventh.completed_goals[0].completed_month, "2027-03");
    assert_eq!(seventh.financials.total_allocated_to_goals, 0.0);
    assert_eq!(seventh.financials.surplus, 200.0);
}

#[test]
fn urgency_sets_first_month_ratio() {
    let deadline = date(2027, 8, 1);
    let urgent = Goal::new("Urgent", GoalCategory::Emergency, 1_000.0, deadline).with_urgency(5);
    let relaxed = Goal::new("Relaxed", GoalCategory::Vacation, 1_000.0, deadline).with_urgency(1);
    let scenario = scenario_with_surplus(600.0, vec![urgent, relaxed]);
    let report = project(&scenario, ProjectionRequest::new(0, 1));

    let first = &report.months[0];
    let urgent = active(first, "Urgent").monthly_allocation;
    let relaxed = active(first, "Relaxed").monthly_allocation;
    assert!(approx_eq(urgent / relaxed, 5.0));
    assert!(approx_eq(urgent, 500.0));
    assert!(approx_eq(relaxed, 100.0));
}

#[test]
fn funded_investment_goal_still_compounds() {
    let fund = Goal::new("Brokerage", GoalCategory::Investment, 1_000.0, date(2030, 1, 1))
        .with_current_amount(1_000.0)
        .with_interest_rate(12.0);
    let scenario = scenario_with_surplus(300.0, vec![fund]);
    let report = project(&scenario, ProjectionRequest::new(0, 2));

    let first = &report.months[0];
    let brokerage = active(first, "Brokerage");
    let expected = 1_000.0 * 1.12_f64.powf(1.0 / 12.0);
    assert!(approx_eq(brokerage.projected_balance, expected));
    assert!((brokerage.projected_balance - 1_009.49).abs() < 0.01);
    assert_eq!(brokerage.monthly_allocation, 0.0);
    assert_eq!(brokerage.status, GoalProjectionStatus::Completed);
    assert_eq!(first.financials.total_allocated_to_goals, 0.0);
    assert_eq!(first.financials.surplus, 300.0);

    assert_eq!(report.months[1].completed_goals.len(), 1);
    assert!(approx_eq(report.months[1].completed_goals[0].final_balance, expected));
}

#[test]
fn investment_growth_compounds_before_contribution() {
    let fund = Goal::new("Brokerage", GoalCategory::Investment, 50_000.0, date(2036, 1, 1))
        .with_current_amount(1_000.0)
        .with_interest_rate(12.0);
    let scenario = scenario_with_surplus(100.0, vec![fund]);
    let report = project(&scenario, ProjectionRequest::new(0, 2));

    let rate = 1.12_f64.powf(1.0 / 12.0) - 1.0;
    let month0 = 1_000.0 * (1.0 + rate) + 100.0;
    let month1 = month0 * (1.0 + rate) + 100.0;
    assert!(approx_eq(active(&report.months[0], "Brokerage").projected_balance, month0));
    assert!(approx_eq(active(&report.months[1], "Brokerage").projected_balance, month1));
}

#[test]
fn no_active_goals_returns_financial_only_months() {
    let paused = Goal::new("Someday", GoalCategory::House, 90_000.0, date(2035, 1, 1))
        .with_status(GoalStatus::Paused);
    let scenario = Scenario {
        goals: vec![paused],
        income_sources: vec![IncomeSource::new("Salary", 2_800.0, 3_200.0)],
        recurring_expenses: vec![RecurringExpense::new("Rent", 2_000.0)],
        ..Scenario::default()
    };
    let report = project(&scenario, ProjectionRequest::new(0, 12));

    assert_eq!(report.total_active_goals, 0);
    assert_eq!(report.months.len(), 12);
    for month in &report.months {
        assert!(month.active_goals.is_empty());
        assert!(month.upcoming_goals.is_empty());
        assert!(month.completed_goals.is_empty());
        assert_eq!(month.financials.total_allocated_to_goals, 0.0);
        assert_eq!(month.financials.income, 3_000.0);
        assert_eq!(month.financials.expenses, 2_000.0);
        assert_eq!(month.financials.surplus, 1_000.0);
        assert!(approx_eq(month.financials.savings_rate, 100.0 / 3.0));
        assert_eq!(month.summary.active_count, 0);
    }
}

#[test]
fn offset_window_matches_full_simulation() {
    let scenario = scenario_with_surplus(900.0, common::household_goals());
    let windowed = project(&scenario, ProjectionRequest::new(3, 3));
    let full = project(&scenario, ProjectionRequest::new(0, 6));

    assert_eq!(windowed.start_offset, 3);
    let months: Vec<&str> = windowed.months.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, vec!["2027-01", "2027-02", "2027-03"]);
    assert_eq!(windowed.months[0].label, "January 2027");
    assert_eq!(windowed.months[0].month_offset, 3);

    for (partial, complete) in windowed.months.iter().zip(full.months.iter().skip(3)) {
        assert_eq!(partial, complete);
    }
}

#[test]
fn upcoming_goal_reports_start_label() {
    let later = Goal::new("Wedding", GoalCategory::Other, 6_000.0, date(2028, 6, 1))
        .with_start_date(date(2027, 2, 14));
    let now = Goal::new("Buffer", GoalCategory::Emergency, 2_000.0, date(2027, 6, 1));
    let scenario = scenario_with_surplus(500.0, vec![later, now]);
    let report = project(&scenario, ProjectionRequest::new(0, 6));

    let first = &report.months[0];
    assert_eq!(first.upcoming_goals.len(), 1);
    assert_eq!(first.upcoming_goals[0].starts_in, "Starts in 4 months");
    assert_eq!(first.upcoming_goals[0].start_month, "2027-02");
    assert_eq!(report.months[3].upcoming_goals[0].starts_in, "Starts in 1 month");

    let start = &report.months[4];
    assert!(start.upcoming_goals.is_empty());
    assert!(active(start, "Wedding").is_starting_this_month);
    assert!(active(start, "Wedding").monthly_allocation > 0.0);
}

#[test]
fn one_time_net_only_affects_origin_month() {
    let mut scenario = scenario_with_surplus(
        400.0,
        vec![Goal::new("Buffer", GoalCategory::Emergency, 50_000.0, date(2029, 1, 1))],
    );
    scenario.one_time_transactions = vec![
        projection_core::domain::OneTimeTransaction::income("Bonus", date(2026, 10, 20), 600.0),
        projection_core::domain::OneTimeTransaction::expense("Repair", date(2026, 10, 2), 100.0),
    ];
    let report = project(&scenario, ProjectionRequest::new(0, 2));

    assert_eq!(report.months[0].financials.one_time_net, 500.0);
    assert_eq!(report.months[0].financials.surplus, 900.0);
    assert!(approx_eq(report.months[0].financials.total_allocated_to_goals, 900.0));
    assert_eq!(report.months[1].financials.one_time_net, 0.0);
    assert_eq!(report.months[1].financials.surplus, 400.0);
}

#[test]
fn engine_uses_month_of_supplied_origin() {
    let scenario = scenario_with_surplus(
        100.0,
        vec![Goal::new("Buffer", GoalCategory::Emergency, 500.0, date(2027, 6, 1))],
    );
    let report = projection_core::ProjectionEngine::project(
        &projection_core::services::GatheredInputs {
            goals: scenario.goals.clone(),
            income_sources: scenario.income_sources.clone(),
            recurring_expenses: scenario.recurring_expenses.clone(),
            ..Default::default()
        }
        .as_inputs(),
        ProjectionRequest::new(0, 1),
        date(2026, 10, 27),
    );
    assert_eq!(report.months[0].month, projection_core::domain::month::month_id(origin()));
}

#[test]
fn average_progress_covers_active_goals_only() {
    let start = date(2026, 11, 1);
    let quarter = Goal::new("Quarter", GoalCategory::Other, 1_000.0, date(2028, 1, 1))
        .with_current_amount(250.0)
        .with_start_date(start);
    let most = Goal::new("Most", GoalCategory::Other, 1_000.0, date(2028, 1, 1))
        .with_current_amount(750.0)
        .with_start_date(start);
    let scenario = scenario_with_surplus(0.0, vec![quarter, most]);
    let report = project(&scenario, ProjectionRequest::new(0, 2));

    let before = &report.months[0];
    assert!(before.active_goals.is_empty());
    assert_eq!(before.summary.upcoming_count, 2);
    assert_eq!(before.summary.average_progress, 0.0);

    let started = &report.months[1];
    assert_eq!(active(started, "Quarter").progress_percent, 25.0);
    assert_eq!(active(started, "Most").progress_percent, 75.0);
    assert_eq!(started.summary.average_progress, 50.0);
}
