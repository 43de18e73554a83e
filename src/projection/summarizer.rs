//! Reduces income and expense records into the scalar monthly totals the
//! simulation runs on.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    month::{month_index, MonthIndex},
    IncomeSource, OneTimeTransaction, RecurringExpense, SideIncome,
};

/// Borrowed view over the cash-flow collections of one projection request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CashflowInputs<'a> {
    pub income_sources: &'a [IncomeSource],
    pub side_incomes: &'a [SideIncome],
    pub recurring_expenses: &'a [RecurringExpense],
    pub one_time_transactions: &'a [OneTimeTransaction],
}

/// Scalar monthly totals derived from the active cash-flow records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSummary {
    pub base_monthly_income: f64,
    pub side_project_income: f64,
    pub monthly_expenses: f64,
    /// One-time income minus one-time expenses in the origin month.
    pub one_time_net: f64,
}

impl IncomeSummary {
    /// Builds the financial aggregate for `month`; the one-time net only
    /// counts in the origin month.
    pub fn financials_for(&self, month: MonthIndex) -> MonthlyFinancials {
        let one_time_net = if month == 0 { self.one_time_net } else { 0.0 };
        let income = self.base_monthly_income + self.side_project_income + one_time_net;
        MonthlyFinancials {
            base_monthly_income: self.base_monthly_income,
            side_project_income: self.side_project_income,
            one_time_net,
            monthly_expenses: self.monthly_expenses,
            surplus: (income - self.monthly_expenses).max(0.0),
        }
    }
}

/// Per-month income/expense aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFinancials {
    pub base_monthly_income: f64,
    pub side_project_income: f64,
    pub one_time_net: f64,
    pub monthly_expenses: f64,
    pub surplus: f64,
}

impl MonthlyFinancials {
    pub fn income(&self) -> f64 {
        self.base_monthly_income + self.side_project_income + self.one_time_net
    }

    /// Surplus as a percentage of income, `0` when there is no income.
    pub fn savings_rate(&self) -> f64 {
        let income = self.income();
        if income <= 0.0 {
            0.0
        } else {
            self.surplus / income * 100.0
        }
    }
}

/// Sums active records; one-time transactions outside the origin month are
/// ignored.
pub fn summarize(inputs: &CashflowInputs<'_>, origin: NaiveDate) -> IncomeSummary {
    let base_monthly_income = inputs
        .income_sources
        .iter()
        .filter(|source| source.status.is_active())
        .map(IncomeSource::mid_monthly_estimate)
        .sum();
    let side_project_income = inputs
        .side_incomes
        .iter()
        .filter(|side| side.status.is_active())
        .map(|side| side.current_monthly_earnings)
        .sum();
    let monthly_expenses = inputs
        .recurring_expenses
        .iter()
        .filter(|expense| expense.status.is_active())
        .map(|expense| expense.amount)
        .sum();
    let one_time_net = inputs
        .one_time_transactions
        .iter()
        .filter(|txn| month_index(origin, txn.date) == 0)
        .map(OneTimeTransaction::signed_amount)
        .sum();

    IncomeSummary {
        base_monthly_income,
        side_project_income,
        monthly_expenses,
        one_time_net,
    }
}
