use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use projection_core::{
    domain::{Goal, GoalCategory, IncomeSource, OneTimeTransaction, RecurringExpense, SideIncome},
    services::FixedClock,
    storage::{load_scenario_from_path, save_scenario_to_path, Scenario},
    ProjectionRequest, ProjectionService,
};
use tempfile::tempdir;

const CATEGORIES: [GoalCategory; 5] = [
    GoalCategory::Emergency,
    GoalCategory::Vacation,
    GoalCategory::Debt,
    GoalCategory::Investment,
    GoalCategory::House,
];

fn build_sample_scenario(goal_count: usize) -> Scenario {
    let start = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
    let goals = (0..goal_count)
        .map(|idx| {
            let category = CATEGORIES[idx % CATEGORIES.len()];
            let deadline = start + chrono::Months::new(3 + (idx % 36) as u32);
            let mut goal = Goal::new(
                format!("Goal {idx}"),
                category,
                1_000.0 + (idx % 50) as f64 * 250.0,
                deadline,
            )
            .with_urgency(1 + (idx % 5) as u8)
            .with_current_amount((idx % 7) as f64 * 100.0);
            if idx % 4 == 0 {
                goal = goal.with_start_date(start + chrono::Months::new((idx % 12) as u32));
            }
            if category == GoalCategory::Investment {
                goal = goal.with_interest_rate(5.0 + (idx % 3) as f64);
            }
            goal
        })
        .collect();

    Scenario {
        goals,
        income_sources: vec![IncomeSource::new("Salary", 5_500.0, 6_500.0)],
        side_incomes: vec![SideIncome::new("Consulting", 800.0)],
        recurring_expenses: vec![
            RecurringExpense::new("Rent", 2_200.0),
            RecurringExpense::new("Utilities", 300.0),
        ],
        one_time_transactions: vec![OneTimeTransaction::income("Bonus", start, 2_000.0)],
    }
}

fn bench_projection(c: &mut Criterion) {
    let scenario = build_sample_scenario(black_box(200));
    let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());

    c.bench_function("project_24_months_200_goals", |b| {
        b.iter(|| {
            let report =
                ProjectionService::project(&scenario, &clock, ProjectionRequest::new(0, 24))
                    .expect("projection");
            black_box(report);
        })
    });

    c.bench_function("project_offset_window_json", |b| {
        b.iter_batched(
            || scenario.clone(),
            |scenario| {
                let report =
                    ProjectionService::project(&scenario, &clock, ProjectionRequest::new(12, 12))
                        .expect("projection");
                black_box(serde_json::to_string(&report).expect("serialize"));
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_scenario_io(c: &mut Criterion) {
    let scenario = build_sample_scenario(black_box(1_000));
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("scenario.json");

    c.bench_function("scenario_save_1k", |b| {
        b.iter(|| {
            save_scenario_to_path(&scenario, &file_path).expect("save scenario");
        })
    });

    save_scenario_to_path(&scenario, &file_path).expect("seed");

    c.bench_function("scenario_load_1k", |b| {
        b.iter(|| {
            let loaded = load_scenario_from_path(&file_path).expect("load scenario");
            black_box(loaded);
        })
    });
}

criterion_group!(benches, bench_projection, bench_scenario_io);
criterion_main!(benches);
