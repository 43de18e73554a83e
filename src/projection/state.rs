//! Per-goal mutable simulation records.

use chrono::NaiveDate;

use crate::domain::{
    month::{month_index, MonthIndex},
    Goal,
};

use super::compounding::{apply_month, goal_growth_rate};

/// Lifecycle of a goal within one simulated month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalPhase {
    NotStarted,
    Active,
    /// Finished in a strictly earlier month.
    Completed,
}

/// Transient simulation record derived from one active [`Goal`].
///
/// The allocation ledger and the end-of-month balance cache are dense vectors
/// indexed by the month offset from the goal's first simulated month, which is
/// its start month or the origin for goals that started in the past.
#[derive(Debug, Clone)]
pub struct GoalSimulationState<'a> {
    goal: &'a Goal,
    balance: f64,
    start_month: MonthIndex,
    deadline_month: MonthIndex,
    completion_month: Option<MonthIndex>,
    growth_rate: f64,
    first_month: MonthIndex,
    allocations: Vec<f64>,
    balances: Vec<f64>,
}

impl<'a> GoalSimulationState<'a> {
    pub fn new(goal: &'a Goal, origin: NaiveDate, horizon: usize) -> Self {
        let start_month = goal
            .start_date
            .map(|date| month_index(origin, date))
            .unwrap_or(0);
        let first_month = start_month.max(0);
        let slots = (horizon as i64 - first_month as i64).max(0) as usize;
        Self {
            goal,
            balance: goal.current_amount,
            start_month,
            deadline_month: month_index(origin, goal.deadline),
            completion_month: None,
            growth_rate: goal_growth_rate(goal),
            first_month,
            allocations: vec![0.0; slots],
            balances: Vec::with_capacity(slots),
        }
    }

    pub fn goal(&self) -> &'a Goal {
        self.goal
    }

    /// Balance after the most recently simulated month.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn start_month(&self) -> MonthIndex {
        self.start_month
    }

    pub fn deadline_month(&self) -> MonthIndex {
        self.deadline_month
    }

    pub fn completion_month(&self) -> Option<MonthIndex> {
        self.completion_month
    }

    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    /// Started and not yet completed.
    pub fn is_eligible(&self, month: MonthIndex) -> bool {
        month >= self.start_month && self.completion_month.is_none()
    }

    /// Balance has crossed the target but completion is not recorded yet.
    pub fn has_reached_target(&self) -> bool {
        self.completion_month.is_none() && self.balance >= self.goal.target_amount
    }

    pub fn phase_in(&self, month: MonthIndex) -> GoalPhase {
        if month < self.start_month {
            GoalPhase::NotStarted
        } else if matches!(self.completion_month, Some(done) if done < month) {
            GoalPhase::Completed
        } else {
            GoalPhase::Active
        }
    }

    /// Applies growth on the prior balance, then this month's allocation.
    pub fn apply(&mut self, month: MonthIndex, allocation: f64) {
        self.balance = apply_month(self.balance, self.growth_rate, allocation);
        if let Some(slot) = self.slot(month) {
            self.allocations[slot] = allocation;
        }
    }

    /// Records completion once; later calls leave the first month untouched.
    pub fn mark_completed(&mut self, month: MonthIndex) {
        if self.completion_month.is_none() {
            self.completion_month = Some(month);
        }
    }

    /// Caches the end-of-month balance. Must be called for every simulated
    /// month, in order.
    pub fn close_month(&mut self, month: MonthIndex) {
        if let Some(slot) = self.slot(month) {
            if slot == self.balances.len() {
                self.balances.push(self.balance);
            }
        }
    }

    pub fn allocation_in(&self, month: MonthIndex) -> f64 {
        self.slot(month)
            .map(|slot| self.allocations[slot])
            .unwrap_or(0.0)
    }

    /// End-of-month balance for `month`, read from the cache.
    pub fn balance_at(&self, month: MonthIndex) -> f64 {
        if month < self.first_month {
            return self.goal.current_amount;
        }
        self.slot(month)
            .and_then(|slot| self.balances.get(slot).copied())
            .unwrap_or(self.balance)
    }

    /// Rebuilds the end-of-month balance for `month` from the allocation
    /// ledger alone, reapplying growth at each step.
    pub fn replay_balance(&self, month: MonthIndex) -> f64 {
        let mut balance = self.goal.current_amount;
        if self.allocations.is_empty() {
            return balance;
        }
        let last_slot = self.first_month + self.allocations.len() as MonthIndex - 1;
        let mut last = month.min(last_slot);
        if let Some(done) = self.completion_month {
            last = last.min(done);
        }
        for current in self.first_month..=last {
            balance = apply_month(balance, self.growth_rate, self.allocation_in(current));
        }
        balance
    }

    fn slot(&self, month: MonthIndex) -> Option<usize> {
        if month < self.first_month {
            return None;
        }
        let slot = (month - self.first_month) as usize;
        (slot < self.allocations.len()).then_some(slot)
    }
}
